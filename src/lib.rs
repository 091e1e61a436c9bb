//! `radio-can` library: a CAN transport driver that makes a low-power packet
//! radio behave like a CAN bus segment, in a `no_std` environment. The crate
//! exposes the radio wire codec, the interrupt/task packet queues, the
//! hardware and protocol-stack abstraction traits, and the driver that ties
//! them together.
#![no_std]
//==================================================================================
/// Shared data types: radio packets and sizing constants.
pub mod core;
/// Driver object: lifecycle, radio event handler, statistics, configuration
/// and diagnostics.
pub mod driver;
/// Codec, configuration, queue and driver errors.
pub mod error;
/// Wire codec between CAN frames and radio packets.
pub mod infra;
/// CAN frame representation, transport queues and abstraction traits.
pub mod transport;
//==================================================================================
pub use crate::driver::{config::RadioConfig, stats::Stats, LinkState, RadioCanDriver};
pub use crate::transport::can_frame::CanFrame;
