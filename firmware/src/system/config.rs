//! General system configuration

use embassy_nrf::config::{Config, Debug, HfclkSource, LfclkSource};

/// Brightness used while the watchface is shown
pub const BACKLIGHT_LEVEL: u8 = 2;

/// Offset of local time from UTC, in seconds
pub const TIMEZONE: i32 = 3_600;

/// Whether the watch starts in 24 hour style
pub const DEFAULT_24H_STYLE: bool = true;

pub struct SystemConfig {}

impl SystemConfig {
    /// Create new system configuration
    pub fn new() -> Config {
        // Generate default config, required because Config is set as
        // `non_exhaustive`
        let mut config = Config::default();

        // The RTC behind the wall clock needs the low-frequency crystal
        config.hfclk_source = HfclkSource::ExternalXtal;
        config.lfclk_source = LfclkSource::ExternalXtal;

        // Enable DC/DC regulator to massively reduce runtime current consumption
        config.dcdc.reg1 = true;

        // Allow debugging
        config.debug = Debug::Allowed;

        config
    }
}
