//! Transport layer: CAN frame representation, the interrupt/task packet
//! queues and the abstraction traits the driver is built on.
pub mod can_frame;
pub mod queues;
pub mod traits;
