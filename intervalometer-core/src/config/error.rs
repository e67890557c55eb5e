//! Configuration validation errors

/// Errors found while building settings from a configuration
///
/// Each variant carries the label of the offending setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `min` is greater than `max`
    EmptyRange { label: &'static str },
    /// Default value outside `min..=max`
    DefaultOutOfRange { label: &'static str },
    /// Step is zero or negative
    InvalidStep { label: &'static str },
    /// More decimal places than the formatter supports
    PrecisionTooLarge { label: &'static str },
    /// Option list is empty
    NoOptions { label: &'static str },
    /// Default option index past the end of the list
    DefaultOptionOutOfRange { label: &'static str },
    /// Label or option text wider than the display
    LabelTooLong { label: &'static str },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyRange { label } => write!(f, "{}: minimum exceeds maximum", label),
            ConfigError::DefaultOutOfRange { label } => {
                write!(f, "{}: default value outside range", label)
            }
            ConfigError::InvalidStep { label } => write!(f, "{}: step must be positive", label),
            ConfigError::PrecisionTooLarge { label } => {
                write!(f, "{}: too many decimal places", label)
            }
            ConfigError::NoOptions { label } => write!(f, "{}: no options", label),
            ConfigError::DefaultOptionOutOfRange { label } => {
                write!(f, "{}: default option out of range", label)
            }
            ConfigError::LabelTooLong { label } => {
                write!(f, "{}: text wider than the display", label)
            }
        }
    }
}
