//! Minimal abstraction over the packet radio. Register access, SPI framing
//! and pin handling live in the implementation; the driver only sequences
//! these capabilities.
//!
//! Every method except [`RadioHal::configure`], [`RadioHal::probe`] and
//! [`RadioHal::open`] is called from the radio interrupt handler and must
//! therefore return promptly without waiting on another task.
use bitflags::bitflags;

use crate::core::MAX_RADIO_PAYLOAD;
use crate::driver::config::RadioConfig;

//==================================================================================STATUS_FLAGS
bitflags! {
    /// Interrupt status flags reported by the radio.
    ///
    /// Bit positions follow the nRF24L01 STATUS register.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        /// At least one packet is waiting in the RX FIFO.
        const RX_DATA_READY = 1 << 6;
        /// The last transmission was acknowledged.
        const TX_DATA_SENT = 1 << 5;
        /// The hardware exhausted its retransmit budget.
        const MAX_RETRANSMITS = 1 << 4;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "StatusFlags({=u8:#x})", self.bits())
    }
}

//==================================================================================RADIO_HAL
/// Capability set of the radio consumed by the driver.
pub trait RadioHal {
    type Error: core::fmt::Debug;

    /// Apply address, channel and retransmit settings.
    fn configure(&mut self, config: &RadioConfig) -> Result<(), Self::Error>;
    /// Check that the device answers. A failure means the radio is absent or dead.
    fn probe(&mut self) -> Result<(), Self::Error>;
    /// Power the radio up.
    fn open(&mut self) -> Result<(), Self::Error>;
    /// Power the radio down.
    fn close(&mut self);
    /// Arm (`true`) or disarm the radio's event interrupt line. Once armed,
    /// the embedding routes that interrupt to
    /// [`RadioCanDriver::on_radio_event`](crate::driver::RadioCanDriver::on_radio_event).
    fn notify(&mut self, enabled: bool);

    /// Enter receive mode; also starts carrier detection.
    fn listen(&mut self);
    /// Enter standby; stops the radio clock.
    fn standby(&mut self);
    /// Read and clear the interrupt status flags in one operation.
    fn clear_status(&mut self) -> StatusFlags;
    /// Number of packets waiting in the receive FIFO.
    fn rx_pending(&mut self) -> usize;
    /// Pop one packet from the receive FIFO into `buffer`, returning its size.
    fn read(&mut self, buffer: &mut [u8; MAX_RADIO_PAYLOAD]) -> usize;
    /// Load one packet into the transmit FIFO and start sending it.
    fn write(&mut self, payload: &[u8]);
    /// Drop everything in the transmit FIFO.
    fn flush_tx(&mut self);
    /// Drop everything in the receive FIFO.
    fn flush_rx(&mut self);
    /// Carrier sense: `true` when no other transmission is detected.
    fn channel_available(&mut self) -> bool;
}
