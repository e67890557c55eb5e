//! Fixed-point number formatting
//!
//! Settings store integers and display them with a fixed number of decimal
//! places: an exposure of `12345` ms at precision 3 reads `12.345`.

use core::fmt::Write;

use heapless::String;

/// Largest supported number of decimal places
pub const MAX_PRECISION: u8 = 9;

/// Capacity that fits every `i32` at every precision up to [`MAX_PRECISION`]
///
/// Worst cases: `-2147483648` (11 chars, precision 0) and `-2.147483648`
/// (12 chars, precision 9). Anything in between is one sign, at most ten
/// digits and one point.
pub const FIXED_TEXT_LEN: usize = 12;

/// Output of [`fixed`]
pub type FixedText = String<FIXED_TEXT_LEN>;

const POWERS_OF_TEN: [u32; MAX_PRECISION as usize + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// Formatting errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Output did not fit the buffer
    Overflow,
    /// More decimal places than [`MAX_PRECISION`]
    Precision,
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::Overflow => write!(f, "formatted value does not fit the buffer"),
            FormatError::Precision => {
                write!(f, "precision exceeds {} decimal places", MAX_PRECISION)
            }
        }
    }
}

/// Format `value` with `precision` implied decimal places into a buffer of
/// capacity `N`
///
/// No decimal point is emitted for precision 0. Fractions keep their leading
/// zeros (`5` at precision 3 is `0.005`).
pub fn format_fixed<const N: usize>(value: i32, precision: u8) -> Result<String<N>, FormatError> {
    let scale = *POWERS_OF_TEN
        .get(precision as usize)
        .ok_or(FormatError::Precision)?;

    let magnitude = value.unsigned_abs();
    let whole = magnitude / scale;
    let fraction = magnitude % scale;

    let mut out = String::new();
    if value < 0 {
        out.push('-').map_err(|_| FormatError::Overflow)?;
    }

    let written = if precision == 0 {
        write!(out, "{}", whole)
    } else {
        write!(out, "{}.{:0width$}", whole, fraction, width = precision as usize)
    };
    written.map_err(|_| FormatError::Overflow)?;

    Ok(out)
}

/// Format into a [`FixedText`]
///
/// The capacity covers every input, so the only failure left is a precision
/// above [`MAX_PRECISION`], which setting construction already rejects; it
/// renders as an empty string.
pub fn fixed(value: i32, precision: u8) -> FixedText {
    format_fixed(value, precision).unwrap_or_default()
}
