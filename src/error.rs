//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (frame encoding, queue
//! saturation, configuration, driver lifecycle).
use thiserror_no_std::Error;

//==================================================================================CODEC_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Failures while translating between a CAN frame and a radio packet.
pub enum CodecError {
    /// The frame carries more than eight data bytes.
    #[error("Invalid data length code: {dlc}")]
    InvalidDlc { dlc: u8 },
    /// The identifier does not fit in 29 bits.
    #[error("Identifier out of range: {id:#X}")]
    InvalidId { id: u32 },
    /// The packet is too short or its header is inconsistent with its size.
    #[error("Malformed radio packet")]
    Malformed,
}

//==================================================================================QUEUE_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// A transport queue had no free slot. Transient: the caller may retry later.
#[error("Transport queue is full")]
pub struct QueueFull;

//==================================================================================CONFIG_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Radio parameters rejected by [`RadioConfigBuilder`](crate::driver::config::RadioConfigBuilder).
pub enum ConfigError {
    /// The network address uses more than 40 bits.
    #[error("Address does not fit in 40 bits")]
    AddressTooWide,
    /// The RF channel is above the highest supported channel.
    #[error("Invalid RF channel: {channel}")]
    InvalidChannel { channel: u8 },
    /// The hardware retransmit counter only holds 4 bits.
    #[error("Invalid retry count: {count}")]
    InvalidRetryCount { count: u8 },
    /// The hardware retransmit delay must be a 250 us step within 250..=4000 us.
    #[error("Invalid retry delay: {delay_us} us")]
    InvalidRetryDelay { delay_us: u16 },
}

//==================================================================================DRIVER_ERROR
#[derive(Error, Debug)]
/// Errors reported by the driver lifecycle operations.
pub enum DriverError<E: core::fmt::Debug> {
    /// The radio did not answer the presence probe.
    #[error("Radio probe failed: {0:?}")]
    ProbeFailed(E),
    /// The radio refused its configuration.
    #[error("Radio configuration failed: {0:?}")]
    Configure(E),
    /// The radio could not be opened.
    #[error("Radio open failed: {0:?}")]
    Open(E),
    /// `enable` was called before a successful `init`.
    #[error("Driver not initialized")]
    NotInitialized,
    /// The operation needs an enabled link.
    #[error("Driver not enabled")]
    NotEnabled,
    /// The outbound queue is full; nothing was queued.
    #[error(transparent)]
    QueueFull(#[from] QueueFull),
    /// Frame could not be encoded, or a received packet could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl<E: core::fmt::Debug> embedded_can::Error for DriverError<E> {
    fn kind(&self) -> embedded_can::ErrorKind {
        match self {
            DriverError::QueueFull(_) => embedded_can::ErrorKind::Overrun,
            DriverError::Codec(_) => embedded_can::ErrorKind::Form,
            _ => embedded_can::ErrorKind::Other,
        }
    }
}

//==================================================================================READ_TIMEOUT
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Outcome of a bounded read that did not produce a frame.
pub enum ReadTimeoutError {
    /// No packet arrived before the deadline.
    #[error("Read timed out")]
    Elapsed,
    /// A packet arrived but could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
