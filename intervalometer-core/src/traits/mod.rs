//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and the
//! board. Clock and display come from their own crates and are re-exported
//! here for convenience.

pub mod board;

pub use board::Board;
pub use intervalometer_display::TextDisplay;
pub use intervalometer_hal::Clock;
