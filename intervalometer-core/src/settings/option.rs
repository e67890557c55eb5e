//! Cyclic text option setting

use intervalometer_display::TextDisplay;

use crate::config::{validate_label, ConfigError};

/// One of a fixed list of texts; inc/dec wrap at both ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicOption {
    label: &'static str,
    options: &'static [&'static str],
    index: usize,
    default: usize,
}

impl CyclicOption {
    pub fn new(
        label: &'static str,
        options: &'static [&'static str],
        default: usize,
    ) -> Result<Self, ConfigError> {
        validate_label(label)?;
        if options.is_empty() {
            return Err(ConfigError::NoOptions { label });
        }
        if default >= options.len() {
            return Err(ConfigError::DefaultOptionOutOfRange { label });
        }
        for &option in options {
            validate_label(option)?;
        }

        Ok(Self {
            label,
            options,
            index: default,
            default,
        })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Selected index
    pub fn get(&self) -> usize {
        self.index
    }

    /// Selected text
    pub fn selected(&self) -> &'static str {
        self.options[self.index]
    }

    pub fn inc(&mut self) {
        self.index = (self.index + 1) % self.options.len();
    }

    pub fn dec(&mut self) {
        self.index = self.index.checked_sub(1).unwrap_or(self.options.len() - 1);
    }

    pub fn reset(&mut self) {
        self.index = self.default;
    }

    pub fn draw<D: TextDisplay>(&self, display: &mut D) {
        display.clear();
        display.print_at(0, 0, self.label);
        display.print_right(1, self.selected());
    }
}
