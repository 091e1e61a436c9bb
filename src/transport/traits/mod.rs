//! Abstraction traits at the driver's seams: the radio hardware, the
//! protocol-stack-facing CAN driver contract, the timer used by diagnostics
//! and the fatal fault escalation hook.
pub mod can_driver;
pub mod fault_hook;
pub mod radio_hal;
pub mod radio_timer;
