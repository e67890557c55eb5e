//! Menu navigation
//!
//! The eight settings form a fixed ring. Prev/Next walk the ring, skipping
//! the sensor settings while the sensor is unused.

pub mod navigation;

pub use navigation::Role;
