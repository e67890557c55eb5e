//! Shoot sequence planning
//!
//! Decides, per exposure, whether the sequence first waits for the sensor
//! and how long it pauses between shots.

pub mod mode;
pub mod plan;

pub use mode::ShootMode;
pub use plan::ShotPlan;
