//! Board I/O trait

use crate::input::Button;

/// Pin-level I/O the control core drives
///
/// `intervalometer-drivers` provides `GpioBoard`, which implements this on
/// top of the HAL pin traits. None of the operations can fail; a board that
/// sees a pin error must pick a safe value (button released, output left as
/// is) itself.
pub trait Board {
    /// Raw level of a button line
    ///
    /// Buttons are active-low with pull-ups: `true` means released.
    fn button_is_high(&mut self, button: Button) -> bool;

    /// Sample the trip sensor (0-1023)
    fn read_sensor(&mut self) -> u16;

    /// Drive the camera focus line
    fn set_focus(&mut self, active: bool);

    /// Drive the camera shutter line
    fn set_shutter(&mut self, active: bool);

    /// Switch the trip sensor's supply
    ///
    /// The sensor is unpowered while the shutter is open.
    fn set_sensor_power(&mut self, on: bool);

    /// Set the display backlight PWM level
    fn set_backlight(&mut self, level: u8);
}
