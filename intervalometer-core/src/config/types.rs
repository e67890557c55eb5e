//! Configuration type definitions

use intervalometer_display::DISPLAY_COLS;

use super::error::ConfigError;
use crate::format::MAX_PRECISION;
use crate::scheduler::ShootMode;

/// Maximum label length (one display row)
pub const MAX_LABEL_LEN: usize = DISPLAY_COLS as usize;

/// Check that a label fits on one display row
pub fn validate_label(label: &'static str) -> Result<(), ConfigError> {
    if label.len() > MAX_LABEL_LEN {
        return Err(ConfigError::LabelTooLong { label });
    }
    Ok(())
}

/// Bounds and default for a numeric setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangeSpec {
    /// Display label
    pub label: &'static str,
    /// Smallest value
    pub min: i32,
    /// Largest value
    pub max: i32,
    /// Implied decimal places when displayed
    pub precision: u8,
    /// Change per button step before acceleration
    pub step: i32,
    /// Value after startup or reset
    pub default: i32,
}

impl RangeSpec {
    /// Create a range spec
    pub const fn new(
        label: &'static str,
        min: i32,
        max: i32,
        precision: u8,
        step: i32,
        default: i32,
    ) -> Self {
        Self {
            label,
            min,
            max,
            precision,
            step,
            default,
        }
    }

    /// Check the spec is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let label = self.label;
        validate_label(label)?;

        if self.min > self.max {
            return Err(ConfigError::EmptyRange { label });
        }
        if !(self.min..=self.max).contains(&self.default) {
            return Err(ConfigError::DefaultOutOfRange { label });
        }
        if self.step <= 0 {
            return Err(ConfigError::InvalidStep { label });
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge { label });
        }

        Ok(())
    }
}

/// Timing of the input and render loops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Minimum spacing between button samples (ms)
    ///
    /// Also the auto-repeat rate of a held Inc/Dec.
    pub input_interval_ms: u32,
    /// How early a countdown stops rendering and sleeps out the rest (ms)
    ///
    /// Must cover the time of one display update.
    pub countdown_margin_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            input_interval_ms: 150,
            countdown_margin_ms: 30,
        }
    }
}

/// Complete set of built-in defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntervalometerConfig {
    /// Backlight PWM level (0-255)
    pub backlight: RangeSpec,
    /// Label of the shooting mode setting
    pub mode_label: &'static str,
    /// Shooting mode after startup
    pub default_mode: ShootMode,
    /// Sensor trip level (raw 0-1023)
    pub threshold: RangeSpec,
    /// Wait between a sensor trip and the exposure (ms)
    pub trigger_delay: RangeSpec,
    /// Shutter open time (ms)
    pub exposure: RangeSpec,
    /// Time from one shot to the next (ms)
    pub interval: RangeSpec,
    /// Number of exposures per sequence
    pub count: RangeSpec,
    /// Label of the start prompt
    pub prompt_label: &'static str,
    /// Loop timing
    pub timing: TimingConfig,
}

impl Default for IntervalometerConfig {
    fn default() -> Self {
        Self {
            backlight: RangeSpec::new("Backlight", 0, 255, 0, 1, 128),
            mode_label: "Mode",
            default_mode: ShootMode::Timelapse,
            threshold: RangeSpec::new("Sensor Level", 0, 1023, 0, 1, 512),
            trigger_delay: RangeSpec::new("Trigger Delay", 0, 3_600_000, 3, 10, 0),
            exposure: RangeSpec::new("Exposure", 1, 3_600_000, 3, 10, 100),
            interval: RangeSpec::new("Interval", 0, 3_600_000, 3, 100, 5_000),
            count: RangeSpec::new("Shots", 1, 9_999, 0, 1, 10),
            prompt_label: "Start",
            timing: TimingConfig::default(),
        }
    }
}
