//! Button state tracking
//!
//! The four menu buttons are sampled together. Each sample produces a level
//! ("down"), an edge ("pressed", true for exactly one sample per press) and a
//! hold duration used to accelerate value changes.

use intervalometer_hal::elapsed_ms;

use crate::traits::Board;

/// Number of menu buttons
pub const BUTTON_COUNT: usize = 4;

/// Hold durations stop growing here (ms)
pub const HOLD_CAP_MS: u32 = 30_000;

/// Menu buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Previous setting; cancels any running wait
    Prev,
    /// Next setting; toggles the sensor readout while waiting for a trip
    Next,
    /// Decrease value
    Dec,
    /// Increase value
    Inc,
}

impl Button {
    /// All buttons in sampling order
    pub const ALL: [Button; BUTTON_COUNT] = [Button::Prev, Button::Next, Button::Dec, Button::Inc];

    /// Position in [`Button::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Debounced button state
///
/// Call [`ButtonManager::update`] once per sample; the queries reflect the
/// most recent sample only.
#[derive(Debug, Clone, Default)]
pub struct ButtonManager {
    /// Buttons held at the last sample
    down: u8,
    /// Buttons that went from released to held at the last sample
    pressed: u8,
    /// Continuous hold time per button (ms)
    hold_ms: [u32; BUTTON_COUNT],
    /// Time of the last sample
    last_sample_ms: Option<u32>,
}

impl ButtonManager {
    /// Create a manager with every button released
    pub const fn new() -> Self {
        Self {
            down: 0,
            pressed: 0,
            hold_ms: [0; BUTTON_COUNT],
            last_sample_ms: None,
        }
    }

    /// Sample all four lines from the board
    pub fn update<B: Board>(&mut self, board: &mut B, now_ms: u32) {
        let mut held = [false; BUTTON_COUNT];
        for button in Button::ALL {
            // Active-low: a pressed button pulls the line down
            held[button.index()] = !board.button_is_high(button);
        }
        self.apply(held, now_ms);
    }

    /// Feed one sample of decoded levels (`true` = held)
    ///
    /// Hold durations advance by the time since the previous sample. If the
    /// clock wrapped in between, that interval counts as zero.
    pub fn apply(&mut self, held: [bool; BUTTON_COUNT], now_ms: u32) {
        let delta = self
            .last_sample_ms
            .and_then(|last| elapsed_ms(last, now_ms))
            .unwrap_or(0);
        self.last_sample_ms = Some(now_ms);

        let previous = self.down;
        self.down = 0;
        self.pressed = 0;

        for button in Button::ALL {
            let hold = &mut self.hold_ms[button.index()];

            if !held[button.index()] {
                *hold = 0;
                continue;
            }

            self.down |= button.mask();
            if previous & button.mask() == 0 {
                self.pressed |= button.mask();
                *hold = 0;
            } else {
                *hold = hold.saturating_add(delta).min(HOLD_CAP_MS);
            }
        }
    }

    /// True only on the sample where `button` went down
    pub fn pressed(&self, button: Button) -> bool {
        self.pressed & button.mask() != 0
    }

    /// True while `button` is held
    pub fn down(&self, button: Button) -> bool {
        self.down & button.mask() != 0
    }

    /// How long `button` has been held continuously (ms)
    pub fn hold_duration(&self, button: Button) -> u32 {
        self.hold_ms[button.index()]
    }

    /// True if any button is held
    pub fn any_down(&self) -> bool {
        self.down != 0
    }
}
