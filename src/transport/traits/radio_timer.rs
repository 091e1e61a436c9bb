//! Asynchronous timer abstraction providing the delays used between
//! channel survey samples.

/// Timer trait abstraction; must remain thread-safe when applicable.
pub trait RadioTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(&'a mut self, millis: u32) -> impl core::future::Future<Output = ()> + 'a;
}

/// [`RadioTimer`] backed by the global `embassy-time` driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyTimer;

impl RadioTimer for EmbassyTimer {
    fn delay_ms<'a>(&'a mut self, millis: u32) -> impl core::future::Future<Output = ()> + 'a {
        embassy_time::Timer::after_millis(millis as u64)
    }
}
