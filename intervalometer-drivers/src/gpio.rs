//! `embedded-hal` digital pin adapters

use embedded_hal::digital;
use intervalometer_hal::{InputPin, OutputPin};

/// Input pin adapter
///
/// A failed read counts as high, which for the active-low buttons means
/// released.
pub struct EhInput<P> {
    pin: P,
}

impl<P: digital::InputPin> EhInput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: digital::InputPin> InputPin for EhInput<P> {
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Input pin read failed");
                true
            }
        }
    }
}

/// Output pin adapter
///
/// Tracks the commanded level itself, so `is_set_high` needs no
/// `StatefulOutputPin`. The pin is driven low on construction.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: digital::OutputPin> EhOutput<P> {
    pub fn new(pin: P) -> Self {
        let mut output = Self { pin, high: false };
        output.set_low();
        output
    }
}

impl<P: digital::OutputPin> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        if self.pin.set_high().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Output pin write failed");
            return;
        }
        self.high = true;
    }

    fn set_low(&mut self) {
        if self.pin.set_low().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Output pin write failed");
            return;
        }
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
