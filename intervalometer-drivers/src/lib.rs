//! Hardware driver implementations
//!
//! This crate connects the intervalometer core to real hardware:
//!
//! - `embedded-hal` 1.0 pin, PWM and delay adapters for the HAL traits
//! - ADC scaling to the 10-bit sensor domain
//! - [`board::GpioBoard`], the [`intervalometer_core::Board`] built from
//!   four button inputs, three outputs, the sensor and the backlight

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adc;
pub mod board;
pub mod clock;
pub mod gpio;
pub mod pwm;

pub use adc::{AdcReader, ScaledAdc};
pub use board::GpioBoard;
pub use clock::DelayClock;
pub use gpio::{EhInput, EhOutput};
pub use pwm::EhPwm;
