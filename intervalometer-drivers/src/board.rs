//! Board wiring
//!
//! ```text
//! buttons[4] ──► Prev, Next, Dec, Inc   (active-low, pull-up)
//! focus      ──► camera half-press
//! shutter    ──► camera full-press
//! sensor_pwr ──► sensor supply switch
//! sensor     ──► ADC channel
//! backlight  ──► PWM channel
//! ```

use intervalometer_core::{Board, Button};
use intervalometer_hal::{AnalogInput, InputPin, OutputPin, PwmOutput};

/// [`Board`] over HAL pin traits
pub struct GpioBoard<I, O, A, P> {
    /// Button lines, indexed like [`Button::ALL`]
    buttons: [I; 4],
    focus: O,
    shutter: O,
    sensor_power: O,
    sensor: A,
    backlight: P,
}

impl<I, O, A, P> GpioBoard<I, O, A, P>
where
    I: InputPin,
    O: OutputPin,
    A: AnalogInput,
    P: PwmOutput,
{
    /// Wire up the board
    ///
    /// Camera outputs start released and the sensor starts powered.
    pub fn new(
        buttons: [I; 4],
        focus: O,
        shutter: O,
        sensor_power: O,
        sensor: A,
        backlight: P,
    ) -> Self {
        let mut board = Self {
            buttons,
            focus,
            shutter,
            sensor_power,
            sensor,
            backlight,
        };
        board.set_shutter(false);
        board.set_focus(false);
        board.set_sensor_power(true);
        board
    }

    /// True while either camera line is asserted
    pub fn camera_active(&self) -> bool {
        self.focus.is_set_high() || self.shutter.is_set_high()
    }

    pub fn sensor_powered(&self) -> bool {
        self.sensor_power.is_set_high()
    }
}

impl<I, O, A, P> Board for GpioBoard<I, O, A, P>
where
    I: InputPin,
    O: OutputPin,
    A: AnalogInput,
    P: PwmOutput,
{
    fn button_is_high(&mut self, button: Button) -> bool {
        self.buttons[button.index()].is_high()
    }

    fn read_sensor(&mut self) -> u16 {
        self.sensor.read()
    }

    fn set_focus(&mut self, active: bool) {
        self.focus.set_state(active);
    }

    fn set_shutter(&mut self, active: bool) {
        self.shutter.set_state(active);
    }

    fn set_sensor_power(&mut self, on: bool) {
        self.sensor_power.set_state(on);
    }

    fn set_backlight(&mut self, level: u8) {
        self.backlight.set_duty(level);
    }
}
