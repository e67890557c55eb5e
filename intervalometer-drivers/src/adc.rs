//! Sensor ADC scaling

use intervalometer_hal::{AnalogInput, ANALOG_MAX};

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Native resolution in bits
    const BITS: u8;

    /// Read one raw conversion
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Scales an [`AdcReader`] to the 10-bit sensor domain
///
/// A failed conversion repeats the previous reading so a glitch cannot
/// look like a sensor trip.
pub struct ScaledAdc<R> {
    reader: R,
    last: u16,
}

impl<R: AdcReader> ScaledAdc<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, last: 0 }
    }

    fn scale(raw: u16) -> u16 {
        let scaled = if R::BITS >= 10 {
            raw >> (R::BITS - 10)
        } else {
            raw << (10 - R::BITS)
        };
        scaled.min(ANALOG_MAX)
    }
}

impl<R: AdcReader> AnalogInput for ScaledAdc<R> {
    fn read(&mut self) -> u16 {
        match self.reader.read() {
            Ok(raw) => self.last = Self::scale(raw),
            Err(()) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ADC read failed, reusing {}", self.last);
            }
        }
        self.last
    }
}
