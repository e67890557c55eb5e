//! Configuration types
//!
//! Built-in defaults for every setting. Nothing is persisted: each power-up
//! starts from [`IntervalometerConfig::default`].

pub mod error;
pub mod types;

pub use error::ConfigError;
pub use types::*;
