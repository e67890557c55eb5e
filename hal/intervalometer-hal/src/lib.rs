//! Intervalometer Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the intervalometer core
//! consumes. Chip-specific code (or the `embedded-hal` adapters in
//! `intervalometer-drivers`) implements these traits; the core never
//! touches registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  intervalometer-core (menu, shooting)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  intervalometer-hal (this crate)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  intervalometer-drivers / board code    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`analog::AnalogInput`] - Sensor ADC channel
//! - [`analog::PwmOutput`] - Backlight PWM channel
//! - [`clock::Clock`] - Wrapping millisecond clock with blocking sleep

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod analog;
pub mod clock;
pub mod gpio;

pub use analog::{AnalogInput, PwmOutput, ANALOG_MAX};
pub use clock::{elapsed_ms, Clock};
pub use gpio::{InputPin, OutputPin};
