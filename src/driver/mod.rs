//! CAN driver running over a packet radio.
//!
//! [`RadioCanDriver`] owns the radio, the two transport queues and the link
//! counters. All methods take `&self`, so the driver is meant to live in a
//! `static` (for example through `static_cell::StaticCell`) shared by:
//!
//! * the protocol stack tasks calling `send`/`read`;
//! * the radio interrupt vector calling [`RadioCanDriver::on_radio_event`].
//!
//! ```rust,ignore
//! static DRIVER: StaticCell<RadioCanDriver<Nrf24, ResetOnFault>> = StaticCell::new();
//!
//! let driver = DRIVER.init(RadioCanDriver::new(nrf24, RadioConfig::new(), ResetOnFault));
//! driver.init()?;
//! driver.enable(500_000)?;
//!
//! // EXTI handler wired to the radio IRQ pin:
//! driver.on_radio_event();
//! ```
//!
//! Packet data only crosses contexts through the queues. The radio handle,
//! the link state and the counters sit in critical-section cells that are
//! held for the length of one handler run or one lifecycle call, never
//! across an `.await`.
use core::cell::{Cell, RefCell};

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use embassy_time::{with_timeout, Duration};

use crate::core::QUEUE_CAPACITY;
use crate::error::{CodecError, DriverError, ReadTimeoutError};
use crate::infra::codec::{decode, encode};
use crate::transport::can_frame::CanFrame;
use crate::transport::queues::TransportQueues;
use crate::transport::traits::can_driver::CanDriver;
use crate::transport::traits::fault_hook::{Fault, FaultHook};
use crate::transport::traits::radio_hal::RadioHal;

use self::config::RadioConfig;
use self::stats::{Stats, StatsCounter};

pub mod config;
pub mod event_handler;
pub mod nb_can;
pub mod stats;
pub mod survey;

/// Lifecycle state of the radio link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// `init` has not succeeded yet.
    Uninitialized,
    /// Radio configured and probed, not yet listening.
    Ready,
    /// Radio open; frames flow in both directions.
    Enabled,
    /// Radio closed after having been enabled; queues are kept.
    Closed,
}

/// CAN transport over a packet radio. `N` is the depth of each queue.
pub struct RadioCanDriver<R, F, const N: usize = QUEUE_CAPACITY>
where
    R: RadioHal,
    F: FaultHook,
{
    radio: Mutex<CriticalSectionRawMutex, RefCell<R>>,
    state: Mutex<CriticalSectionRawMutex, Cell<LinkState>>,
    queues: TransportQueues<N>,
    stats: StatsCounter,
    config: RadioConfig,
    fault_hook: F,
}

impl<R, F, const N: usize> RadioCanDriver<R, F, N>
where
    R: RadioHal,
    F: FaultHook,
{
    /// Wrap a radio. Nothing touches the hardware until [`init`](Self::init).
    pub const fn new(radio: R, config: RadioConfig, fault_hook: F) -> Self {
        Self {
            radio: Mutex::new(RefCell::new(radio)),
            state: Mutex::new(Cell::new(LinkState::Uninitialized)),
            queues: TransportQueues::new(),
            stats: StatsCounter::new(),
            config,
            fault_hook,
        }
    }

    //==================================================================================LIFECYCLE
    /// Configure and probe the radio, then start from empty queues and
    /// zeroed counters.
    ///
    /// A failed probe is unrecoverable: the fault hook is invoked first and
    /// [`DriverError::ProbeFailed`] is only returned if the hook comes back.
    ///
    /// Re-initialising an enabled link powers the radio down and disarms its
    /// interrupt first; `enable` brings it back.
    pub fn init(&self) -> Result<(), DriverError<R::Error>> {
        if self.state() == LinkState::Enabled {
            self.shut_down();
        }
        self.with_radio(|radio| {
            radio.configure(&self.config).map_err(DriverError::Configure)?;
            radio.probe().map_err(DriverError::ProbeFailed)
        })
        .inspect_err(|err| {
            if matches!(err, DriverError::ProbeFailed(_)) {
                #[cfg(feature = "defmt")]
                defmt::error!("Radio probe failed, escalating");
                self.fault_hook.escalate(Fault::RadioProbe);
            }
        })?;

        self.queues.clear();
        self.stats.clear();
        self.set_state(LinkState::Ready);

        #[cfg(feature = "defmt")]
        defmt::info!("Radio link initialised on channel {}", self.config.channel);
        Ok(())
    }

    /// Arm the radio interrupt, power the radio up and start listening.
    ///
    /// Status latched while the link was down is serviced once right away:
    /// the radio holds its IRQ line asserted until the flags are cleared, so
    /// no new edge would otherwise arrive.
    ///
    /// `baudrate` is accepted for interface compatibility and ignored: the
    /// radio has no CAN bit rate.
    pub fn enable(&self, baudrate: u32) -> Result<(), DriverError<R::Error>> {
        let _ = baudrate;
        if self.state() == LinkState::Uninitialized {
            return Err(DriverError::NotInitialized);
        }
        self.with_radio(|radio| -> Result<(), DriverError<R::Error>> {
            radio.notify(true);
            radio.open().map_err(DriverError::Open)?;
            radio.listen();
            Ok(())
        })?;
        self.set_state(LinkState::Enabled);
        self.on_radio_event();

        #[cfg(feature = "defmt")]
        defmt::info!("Radio link enabled");
        Ok(())
    }

    /// Encode `frame` and queue it for transmission without waiting.
    ///
    /// On success the event handler runs once straight away, so the packet
    /// leaves as soon as the channel allows instead of waiting for the next
    /// radio interrupt. A full queue is reported as
    /// [`DriverError::QueueFull`] and nothing is retried.
    ///
    /// That handler run happens in the caller's context inside one critical
    /// section, including any receive FIFO drain it performs. Interrupts stay
    /// masked for the length of those radio transactions.
    pub fn send(&self, frame: &CanFrame) -> Result<(), DriverError<R::Error>> {
        if self.state() != LinkState::Enabled {
            return Err(DriverError::NotEnabled);
        }
        let packet = encode(frame)?;
        self.queues.try_enqueue_outbound(packet).inspect_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Outbound queue full, frame {:#x} refused", frame.id);
        })?;
        self.on_radio_event();
        Ok(())
    }

    /// Wait for the next received packet and decode it.
    ///
    /// Waits indefinitely; see [`read_timeout`](Self::read_timeout) for a
    /// bounded variant. A malformed packet is consumed and reported as
    /// [`DriverError::Codec`].
    pub async fn read(&self) -> Result<CanFrame, DriverError<R::Error>> {
        let packet = self.queues.dequeue_inbound().await;
        Ok(decode(&packet)?)
    }

    /// Decode the next received packet if one is already queued.
    pub fn try_read(&self) -> Result<Option<CanFrame>, CodecError> {
        self.queues
            .try_dequeue_inbound()
            .map(|packet| decode(&packet))
            .transpose()
    }

    /// [`read`](Self::read) bounded by `timeout`. Nothing is consumed when
    /// the deadline passes.
    pub async fn read_timeout(&self, timeout: Duration) -> Result<CanFrame, ReadTimeoutError> {
        let packet = with_timeout(timeout, self.queues.dequeue_inbound())
            .await
            .map_err(|_| ReadTimeoutError::Elapsed)?;
        Ok(decode(&packet)?)
    }

    /// Close then re-enable the link. Queues and counters are kept.
    pub fn reset(&self) -> Result<(), DriverError<R::Error>> {
        self.close();
        self.enable(0)
    }

    /// Disarm the radio interrupt and power the radio down. Queued packets
    /// stay queued for a later `enable`.
    pub fn close(&self) {
        if self.state() == LinkState::Uninitialized {
            return;
        }
        self.shut_down();
        self.set_state(LinkState::Closed);

        #[cfg(feature = "defmt")]
        defmt::info!("Radio link closed");
    }

    //==================================================================================DIAGNOSTICS
    /// Current lifecycle state.
    pub fn state(&self) -> LinkState {
        self.state.lock(|cell| cell.get())
    }

    /// Snapshot of the link counters.
    pub fn stats(&self) -> Stats {
        self.stats.snapshot()
    }

    /// Configuration applied by `init`.
    pub fn config(&self) -> &RadioConfig {
        &self.config
    }

    /// Hook receiving unrecoverable faults.
    pub fn fault_hook(&self) -> &F {
        &self.fault_hook
    }

    /// Packets waiting to be transmitted.
    pub fn outbound_len(&self) -> usize {
        self.queues.outbound_len()
    }

    /// Received packets not yet read.
    pub fn inbound_len(&self) -> usize {
        self.queues.inbound_len()
    }

    //==================================================================================INTERNAL
    /// Events raised from here on stay latched in the radio until `enable`.
    fn shut_down(&self) {
        self.with_radio(|radio| {
            radio.notify(false);
            radio.close();
        });
    }

    fn set_state(&self, state: LinkState) {
        self.state.lock(|cell| cell.set(state));
    }

    /// Run `f` with exclusive access to the radio inside a critical section.
    fn with_radio<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        self.radio.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

//==================================================================================CAN_DRIVER
impl<R, F, const N: usize> CanDriver for RadioCanDriver<R, F, N>
where
    R: RadioHal,
    F: FaultHook,
{
    type Error = DriverError<R::Error>;

    fn init(&self) -> Result<(), Self::Error> {
        RadioCanDriver::init(self)
    }

    fn enable(&self, baudrate: u32) -> Result<(), Self::Error> {
        RadioCanDriver::enable(self, baudrate)
    }

    fn send(&self, frame: &CanFrame) -> Result<(), Self::Error> {
        RadioCanDriver::send(self, frame)
    }

    fn read<'a>(
        &'a self,
    ) -> impl core::future::Future<Output = Result<CanFrame, Self::Error>> + 'a {
        RadioCanDriver::read(self)
    }

    fn reset(&self) -> Result<(), Self::Error> {
        RadioCanDriver::reset(self)
    }

    fn close(&self) {
        RadioCanDriver::close(self)
    }
}
