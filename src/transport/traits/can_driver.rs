//! Contract between a CAN protocol stack and the driver that moves its
//! frames. The stack owns frame semantics and scheduling; the driver only
//! transports opaque frames.
use crate::transport::can_frame::CanFrame;
use futures_util::Future;

/// The six operations a CAN protocol stack expects from its bus driver.
pub trait CanDriver {
    type Error: core::fmt::Debug;

    /// Bring the hardware up and verify it is present.
    fn init(&self) -> Result<(), Self::Error>;
    /// Start moving frames. `baudrate` is advisory; links without a bit rate ignore it.
    fn enable(&self, baudrate: u32) -> Result<(), Self::Error>;
    /// Hand a frame over for transmission without waiting.
    fn send(&self, frame: &CanFrame) -> Result<(), Self::Error>;
    /// Retrieve the next received frame. Waits until data arrives.
    fn read<'a>(&'a self) -> impl Future<Output = Result<CanFrame, Self::Error>> + 'a;
    /// Close and re-enable the link.
    fn reset(&self) -> Result<(), Self::Error>;
    /// Stop the link.
    fn close(&self);
}
