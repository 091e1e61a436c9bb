//! Channel occupancy survey.
//!
//! Samples the radio's carrier detect a number of times to estimate how busy
//! the configured channel is, for example to choose a channel at deployment
//! time. Sampling shares the radio with the event handler and never flushes
//! its FIFOs, so the link keeps working while a survey runs.
use crate::error::DriverError;
use crate::transport::traits::fault_hook::FaultHook;
use crate::transport::traits::radio_hal::RadioHal;
use crate::transport::traits::radio_timer::RadioTimer;

use super::{LinkState, RadioCanDriver};

/// Result of a channel survey.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelOccupancy {
    /// Number of carrier-detect samples taken.
    pub samples: u16,
    /// Samples that found another transmission on the channel.
    pub busy: u16,
}

impl ChannelOccupancy {
    /// Share of busy samples, in percent (0 when nothing was sampled).
    pub fn busy_percent(&self) -> u8 {
        if self.samples == 0 {
            return 0;
        }
        (self.busy as u32 * 100 / self.samples as u32) as u8
    }
}

impl<R, F, const N: usize> RadioCanDriver<R, F, N>
where
    R: RadioHal,
    F: FaultHook,
{
    /// Sample carrier detect `samples` times, `interval_ms` apart.
    ///
    /// The link must be enabled (the radio has to be listening for carrier
    /// detect to mean anything). If it is closed mid-survey, the survey stops
    /// with [`DriverError::NotEnabled`].
    pub async fn survey_channel<T: RadioTimer>(
        &self,
        timer: &mut T,
        samples: u16,
        interval_ms: u32,
    ) -> Result<ChannelOccupancy, DriverError<R::Error>> {
        let mut occupancy = ChannelOccupancy::default();

        for index in 0..samples {
            // Delay between samples, not before the first one.
            if index > 0 {
                timer.delay_ms(interval_ms).await;
            }
            if self.state() != LinkState::Enabled {
                return Err(DriverError::NotEnabled);
            }
            if !self.with_radio(|radio| radio.channel_available()) {
                occupancy.busy += 1;
            }
            occupancy.samples += 1;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Channel survey: {}/{} busy samples",
            occupancy.busy,
            occupancy.samples
        );
        Ok(occupancy)
    }
}
