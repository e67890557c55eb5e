//! Board-agnostic control core for the camera intervalometer
//!
//! This crate contains all logic that does not depend on a specific board:
//!
//! - Button sampling with press edges and hold acceleration
//! - The editable settings (numeric ranges, sensor threshold, exposure,
//!   shooting mode, start prompt)
//! - The cancellable countdown used by every blocking wait
//! - The timelapse manager: menu navigation and the multi-shot sequence
//!
//! Hardware is reached through [`traits::Board`], the
//! [`intervalometer_hal::Clock`] and the
//! [`intervalometer_display::TextDisplay`], all bundled in a
//! [`context::Context`] owned by the entry point.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod log;

pub mod config;
pub mod context;
pub mod format;
pub mod input;
pub mod manager;
pub mod scheduler;
pub mod settings;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, IntervalometerConfig, RangeSpec, TimingConfig};
pub use context::{Context, Poll, Session};
pub use input::{Button, ButtonManager};
pub use manager::{ShootSummary, TimelapseManager};
pub use scheduler::{ShootMode, ShotPlan};
pub use settings::{Cancelled, Edit, Setting};
pub use state::Role;
pub use traits::Board;
