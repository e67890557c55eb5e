//! Analog input and PWM output abstractions

/// Largest value an [`AnalogInput`] may return (10-bit domain)
pub const ANALOG_MAX: u16 = 1023;

/// Analog input channel
///
/// Readings are normalized to the 10-bit range `0..=ANALOG_MAX` regardless
/// of the converter's native resolution.
pub trait AnalogInput {
    /// Take one conversion
    fn read(&mut self) -> u16;
}

/// PWM output channel with an 8-bit duty cycle
pub trait PwmOutput {
    /// Set the duty cycle (0 = off, 255 = fully on)
    fn set_duty(&mut self, duty: u8);
}
