//! Numeric range setting

use intervalometer_display::TextDisplay;
use intervalometer_hal::Clock;

use super::Cancelled;
use crate::config::{ConfigError, RangeSpec};
use crate::context::Session;
use crate::format::fixed;
use crate::traits::Board;

/// Step multiplier for a continuous hold of `hold_ms`
///
/// | hold (ms)   | multiplier |
/// |-------------|------------|
/// | 0..400      | 1          |
/// | 400..600    | 2          |
/// | 600..1000   | 4          |
/// | 1000..1400  | 8          |
/// | 1400..1800  | 32         |
/// | 1800..2200  | 128        |
/// | 2200..      | 512        |
pub const fn ramp(hold_ms: u32) -> i32 {
    match hold_ms {
        0..=399 => 1,
        400..=599 => 2,
        600..=999 => 4,
        1000..=1399 => 8,
        1400..=1799 => 32,
        1800..=2199 => 128,
        _ => 512,
    }
}

/// Integer value kept within `min..=max`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericRange {
    label: &'static str,
    min: i32,
    max: i32,
    precision: u8,
    step: i32,
    default: i32,
    current: i32,
}

impl NumericRange {
    /// Build from a validated spec, starting at its default
    pub fn new(spec: &RangeSpec) -> Result<Self, ConfigError> {
        spec.validate()?;

        Ok(Self {
            label: spec.label,
            min: spec.min,
            max: spec.max,
            precision: spec.precision,
            step: spec.step,
            default: spec.default,
            current: spec.default,
        })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn get(&self) -> i32 {
        self.current
    }

    /// Set directly, clamped to the range
    pub fn set(&mut self, value: i32) {
        self.current = value.clamp(self.min, self.max);
    }

    pub fn reset(&mut self) {
        self.current = self.default;
    }

    pub fn inc(&mut self, hold_ms: u32) {
        self.offset(i64::from(self.step) * i64::from(ramp(hold_ms)));
    }

    pub fn dec(&mut self, hold_ms: u32) {
        self.offset(-i64::from(self.step) * i64::from(ramp(hold_ms)));
    }

    fn offset(&mut self, delta: i64) {
        let value = (i64::from(self.current) + delta).clamp(i64::from(self.min), i64::from(self.max));
        self.current = value as i32;
    }

    /// Label on the first row, value right-aligned on the second
    pub fn draw<D: TextDisplay>(&self, display: &mut D) {
        display.clear();
        display.print_at(0, 0, self.label);
        display.print_right(1, &fixed(self.current, self.precision));
    }

    /// Count down the current value in milliseconds
    pub fn execute<B, C, D>(&mut self, session: &mut Session<'_, B, C, D>) -> Result<(), Cancelled>
    where
        B: Board,
        C: Clock,
        D: TextDisplay,
    {
        session.countdown(self.label, self.current.max(0) as u32)
    }
}
