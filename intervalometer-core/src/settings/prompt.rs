//! Start prompt

use intervalometer_display::TextDisplay;

use super::Edit;
use crate::config::{validate_label, ConfigError};

/// Hint shown under the prompt label
const HINT: &str = "+ to start";

/// Menu entry whose inc starts the shoot sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShootPrompt {
    label: &'static str,
}

impl ShootPrompt {
    pub fn new(label: &'static str) -> Result<Self, ConfigError> {
        validate_label(label)?;
        Ok(Self { label })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn inc(&mut self) -> Edit {
        Edit::Shoot
    }

    pub fn draw<D: TextDisplay>(&self, display: &mut D) {
        display.clear();
        display.print_at(0, 0, self.label);
        display.print_right(1, HINT);
    }
}
