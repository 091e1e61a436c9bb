//! Static radio link parameters applied during `init`.
//!
//! The defaults reproduce the reference deployment: address
//! `0xCE_CECE_CECE`, channel 110, three hardware retransmits 250 us apart.
use crate::error::ConfigError;

/// Default 40-bit network address.
pub const DEFAULT_ADDRESS: u64 = 0xCE_CECE_CECE;
/// Default RF channel (2400 MHz + channel).
pub const DEFAULT_CHANNEL: u8 = 110;
/// Default hardware retransmit count.
pub const DEFAULT_RETRY_COUNT: u8 = 3;
/// Default delay between hardware retransmits (us).
pub const DEFAULT_RETRY_DELAY_US: u16 = 250;

/// Highest RF channel the radio can tune to.
pub const MAX_CHANNEL: u8 = 125;
/// The retransmit counter is a 4-bit field.
pub const MAX_RETRY_COUNT: u8 = 15;
/// Granularity of the retransmit delay (us).
pub const RETRY_DELAY_STEP_US: u16 = 250;
/// Longest retransmit delay (us).
pub const MAX_RETRY_DELAY_US: u16 = 4000;

const ADDRESS_MASK: u64 = 0xFF_FFFF_FFFF;

/// Address, channel and hardware retransmit settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadioConfig {
    /// 40-bit network address shared by every node of the segment.
    pub address: u64,
    /// RF channel.
    pub channel: u8,
    /// Number of automatic retransmits before the radio gives up.
    pub retry_count: u8,
    /// Delay between automatic retransmits (us).
    pub retry_delay_us: u16,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RadioConfig {
    /// Reference configuration. `const` so it can seed a `static` driver.
    pub const fn new() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            channel: DEFAULT_CHANNEL,
            retry_count: DEFAULT_RETRY_COUNT,
            retry_delay_us: DEFAULT_RETRY_DELAY_US,
        }
    }

    /// Start from the defaults and override individual fields.
    pub const fn builder() -> RadioConfigBuilder {
        RadioConfigBuilder {
            config: Self::new(),
        }
    }

    /// Address split into its five bytes, least significant first, as most
    /// radios expect it in their address registers.
    pub fn address_bytes(&self) -> [u8; 5] {
        let bytes = self.address.to_le_bytes();
        [bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]]
    }

    /// Check every field against the radio limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.address & !ADDRESS_MASK != 0 {
            return Err(ConfigError::AddressTooWide);
        }
        if self.channel > MAX_CHANNEL {
            return Err(ConfigError::InvalidChannel {
                channel: self.channel,
            });
        }
        if self.retry_count > MAX_RETRY_COUNT {
            return Err(ConfigError::InvalidRetryCount {
                count: self.retry_count,
            });
        }
        let delay = self.retry_delay_us;
        if delay < RETRY_DELAY_STEP_US
            || delay > MAX_RETRY_DELAY_US
            || delay % RETRY_DELAY_STEP_US != 0
        {
            return Err(ConfigError::InvalidRetryDelay { delay_us: delay });
        }
        Ok(())
    }
}

//==================================================================================BUILDER
/// Fluent builder producing a validated [`RadioConfig`].
#[derive(Debug, Clone, Copy)]
pub struct RadioConfigBuilder {
    config: RadioConfig,
}

impl RadioConfigBuilder {
    pub fn address(mut self, address: u64) -> Self {
        self.config.address = address;
        self
    }

    pub fn channel(mut self, channel: u8) -> Self {
        self.config.channel = channel;
        self
    }

    pub fn retry_count(mut self, count: u8) -> Self {
        self.config.retry_count = count;
        self
    }

    pub fn retry_delay_us(mut self, delay_us: u16) -> Self {
        self.config.retry_delay_us = delay_us;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<RadioConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
