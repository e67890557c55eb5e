//! Character display abstraction for the intervalometer
//!
//! This crate provides:
//! - `TextDisplay` trait covering the three primitives the menu needs
//!   (clear, cursor positioning, printing)
//! - `Screen`, a 16x2 character buffer implementing `TextDisplay`
//!
//! The panel itself (HD44780 or similar) is driven by board code that either
//! implements `TextDisplay` directly or mirrors a `Screen` to the hardware.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod screen;

pub use backend::{TextDisplay, DISPLAY_COLS, DISPLAY_ROWS};
pub use screen::Screen;
