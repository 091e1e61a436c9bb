//! `embedded_can::nb::Can` bridge, so stacks written against the
//! embedded-hal CAN traits can drive the radio link directly.
//!
//! * `transmit` never replaces a pending frame; a full outbound queue is
//!   reported as `WouldBlock`.
//! * `receive` returns `WouldBlock` while the inbound queue is empty.
use crate::error::DriverError;
use crate::transport::can_frame::CanFrame;
use crate::transport::traits::fault_hook::FaultHook;
use crate::transport::traits::radio_hal::RadioHal;

use super::RadioCanDriver;

impl<R, F, const N: usize> embedded_can::nb::Can for &RadioCanDriver<R, F, N>
where
    R: RadioHal,
    F: FaultHook,
{
    type Frame = CanFrame;
    type Error = DriverError<R::Error>;

    fn transmit(&mut self, frame: &CanFrame) -> nb::Result<Option<CanFrame>, Self::Error> {
        match self.send(frame) {
            Ok(()) => Ok(None),
            Err(DriverError::QueueFull(_)) => Err(nb::Error::WouldBlock),
            Err(err) => Err(nb::Error::Other(err)),
        }
    }

    fn receive(&mut self) -> nb::Result<CanFrame, Self::Error> {
        match self.try_read() {
            Ok(Some(frame)) => Ok(frame),
            Ok(None) => Err(nb::Error::WouldBlock),
            Err(err) => Err(nb::Error::Other(DriverError::Codec(err))),
        }
    }
}
