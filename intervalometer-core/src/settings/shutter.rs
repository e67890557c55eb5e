//! Exposure setting

use intervalometer_display::TextDisplay;
use intervalometer_hal::Clock;

use super::numeric::NumericRange;
use super::Cancelled;
use crate::config::{ConfigError, RangeSpec};
use crate::context::Session;
use crate::traits::Board;

/// Shutter open time; executing it takes one exposure
#[derive(Debug, Clone)]
pub struct ShutterTiming {
    range: NumericRange,
}

impl ShutterTiming {
    pub fn new(spec: &RangeSpec) -> Result<Self, ConfigError> {
        Ok(Self {
            range: NumericRange::new(spec)?,
        })
    }

    pub fn range(&self) -> &NumericRange {
        &self.range
    }

    pub fn range_mut(&mut self) -> &mut NumericRange {
        &mut self.range
    }

    /// Hold focus and shutter for the configured time
    ///
    /// The sensor is powered down for the duration. Outputs are released
    /// and sensor power restored on both completion and cancellation.
    pub fn execute<B, C, D>(&mut self, session: &mut Session<'_, B, C, D>) -> Result<(), Cancelled>
    where
        B: Board,
        C: Clock,
        D: TextDisplay,
    {
        let board = session.board();
        board.set_sensor_power(false);
        board.set_focus(true);
        board.set_shutter(true);
        debug!("Shutter open for {} ms", self.range.get());

        let result = self.range.execute(session);

        let board = session.board();
        board.set_shutter(false);
        board.set_focus(false);
        board.set_sensor_power(true);
        debug!("Shutter closed");

        result
    }
}
