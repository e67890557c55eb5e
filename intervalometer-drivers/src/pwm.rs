//! `embedded-hal` PWM adapter

use embedded_hal::pwm::SetDutyCycle;
use intervalometer_hal::PwmOutput;

/// PWM channel driven with 8-bit duty values
pub struct EhPwm<P> {
    channel: P,
}

impl<P: SetDutyCycle> EhPwm<P> {
    pub fn new(channel: P) -> Self {
        Self { channel }
    }
}

impl<P: SetDutyCycle> PwmOutput for EhPwm<P> {
    fn set_duty(&mut self, duty: u8) {
        if self
            .channel
            .set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX))
            .is_err()
        {
            #[cfg(feature = "defmt")]
            defmt::warn!("PWM duty {} rejected", duty);
        }
    }
}
