//! Editable settings
//!
//! Every menu entry is a [`Setting`]. The variants share one capability set
//! (label, get, inc, dec, reset, draw, execute) dispatched by `match`.
//!
//! ```text
//! Setting
//! ├── Numeric   value in min..=max, accelerated steps
//! ├── Sensor    numeric threshold plus armed direction; execute waits for a trip
//! ├── Shutter   numeric duration; execute opens the shutter for that long
//! ├── Choice    cyclic list of texts
//! └── Prompt    inc starts the shoot sequence
//! ```

pub mod numeric;
pub mod option;
pub mod prompt;
pub mod sensor;
pub mod shutter;

pub use numeric::{ramp, NumericRange};
pub use option::CyclicOption;
pub use prompt::ShootPrompt;
pub use sensor::{Direction, SensorTrigger, TriggerDetector};
pub use shutter::ShutterTiming;

use intervalometer_display::TextDisplay;
use intervalometer_hal::Clock;

use crate::context::Session;
use crate::traits::Board;

/// A blocking operation was aborted with the cancel button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cancelled;

impl core::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("cancelled")
    }
}

/// Result of an inc/dec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edit {
    /// The value changed (or stayed clamped)
    Adjusted,
    /// The start prompt was confirmed
    Shoot,
}

/// One menu entry
#[derive(Debug, Clone)]
pub enum Setting {
    Numeric(NumericRange),
    Sensor(SensorTrigger),
    Shutter(ShutterTiming),
    Choice(CyclicOption),
    Prompt(ShootPrompt),
}

impl Setting {
    pub fn label(&self) -> &'static str {
        match self {
            Setting::Numeric(range) => range.label(),
            Setting::Sensor(sensor) => sensor.range().label(),
            Setting::Shutter(shutter) => shutter.range().label(),
            Setting::Choice(choice) => choice.label(),
            Setting::Prompt(prompt) => prompt.label(),
        }
    }

    /// Current value; the option index for a choice, 0 for the prompt
    pub fn get(&self) -> i32 {
        match self {
            Setting::Numeric(range) => range.get(),
            Setting::Sensor(sensor) => sensor.range().get(),
            Setting::Shutter(shutter) => shutter.range().get(),
            Setting::Choice(choice) => choice.get() as i32,
            Setting::Prompt(_) => 0,
        }
    }

    /// Step up, accelerated by how long the button has been held
    pub fn inc<B: Board>(&mut self, hold_ms: u32, board: &mut B) -> Edit {
        match self {
            Setting::Numeric(range) => range.inc(hold_ms),
            Setting::Sensor(sensor) => sensor.inc(hold_ms, board),
            Setting::Shutter(shutter) => shutter.range_mut().inc(hold_ms),
            Setting::Choice(choice) => choice.inc(),
            Setting::Prompt(prompt) => return prompt.inc(),
        }
        Edit::Adjusted
    }

    /// Step down, accelerated by how long the button has been held
    pub fn dec<B: Board>(&mut self, hold_ms: u32, board: &mut B) -> Edit {
        match self {
            Setting::Numeric(range) => range.dec(hold_ms),
            Setting::Sensor(sensor) => sensor.dec(hold_ms, board),
            Setting::Shutter(shutter) => shutter.range_mut().dec(hold_ms),
            Setting::Choice(choice) => choice.dec(),
            Setting::Prompt(_) => {}
        }
        Edit::Adjusted
    }

    /// Back to the built-in default
    pub fn reset(&mut self) {
        match self {
            Setting::Numeric(range) => range.reset(),
            Setting::Sensor(sensor) => sensor.reset(),
            Setting::Shutter(shutter) => shutter.range_mut().reset(),
            Setting::Choice(choice) => choice.reset(),
            Setting::Prompt(_) => {}
        }
    }

    /// Full redraw of the editing screen
    pub fn draw<D: TextDisplay>(&self, display: &mut D) {
        match self {
            Setting::Numeric(range) => range.draw(display),
            Setting::Sensor(sensor) => sensor.draw(display),
            Setting::Shutter(shutter) => shutter.range().draw(display),
            Setting::Choice(choice) => choice.draw(display),
            Setting::Prompt(prompt) => prompt.draw(display),
        }
    }

    /// Blocking action of the setting
    ///
    /// Numeric settings count down their value, the sensor waits for a
    /// trip, the shutter takes an exposure. Choice and prompt return at once.
    pub fn execute<B, C, D>(&mut self, session: &mut Session<'_, B, C, D>) -> Result<(), Cancelled>
    where
        B: Board,
        C: Clock,
        D: TextDisplay,
    {
        match self {
            Setting::Numeric(range) => range.execute(session),
            Setting::Sensor(sensor) => sensor.execute(session),
            Setting::Shutter(shutter) => shutter.execute(session),
            Setting::Choice(_) | Setting::Prompt(_) => Ok(()),
        }
    }
}
