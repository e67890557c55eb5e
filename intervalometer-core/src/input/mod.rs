//! Button input
//!
//! Sampling, press edges, hold tracking and the rate limit that bounds how
//! often the buttons are read.

pub mod buttons;
pub mod throttle;

pub use buttons::{Button, ButtonManager, BUTTON_COUNT, HOLD_CAP_MS};
pub use throttle::Throttle;
