//! Setting roles and the navigation ring

use crate::scheduler::ShootMode;

/// Position of each setting in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    /// Display brightness
    Backlight,
    /// Shooting mode
    Mode,
    /// Sensor trip level
    Threshold,
    /// Wait after a sensor trip
    TriggerDelay,
    /// Shutter open time
    Exposure,
    /// Time between shots
    Interval,
    /// Number of shots
    Count,
    /// Start prompt
    Prompt,
}

impl Role {
    /// Number of settings
    pub const COUNT: usize = 8;

    /// Roles in menu order
    pub const ALL: [Role; Role::COUNT] = [
        Role::Backlight,
        Role::Mode,
        Role::Threshold,
        Role::TriggerDelay,
        Role::Exposure,
        Role::Interval,
        Role::Count,
        Role::Prompt,
    ];

    /// Menu index
    pub const fn index(self) -> usize {
        self as usize
    }

    /// True for settings only meaningful when the sensor is in use
    pub const fn is_sensor_only(self) -> bool {
        matches!(self, Role::Threshold | Role::TriggerDelay)
    }

    /// Neighbour in direction `delta` (negative = previous)
    ///
    /// Wraps at both ends. Sensor-only roles are skipped when `mode` does
    /// not use the sensor.
    pub fn step(self, delta: i8, mode: ShootMode) -> Role {
        let count = Role::COUNT as i32;
        let delta = i32::from(delta.signum());
        if delta == 0 {
            return self;
        }

        let mut index = self.index() as i32;
        for _ in 0..Role::COUNT {
            index = (index + delta).rem_euclid(count);
            let role = Role::ALL[index as usize];
            if mode.uses_sensor() || !role.is_sensor_only() {
                return role;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_next_with_sensor() {
        let mode = ShootMode::SensorEachShot;
        assert_eq!(Role::Mode.step(1, mode), Role::Threshold);
        assert_eq!(Role::Threshold.step(1, mode), Role::TriggerDelay);
        assert_eq!(Role::Prompt.step(1, mode), Role::Backlight);
        assert_eq!(Role::Backlight.step(-1, mode), Role::Prompt);
    }

    #[test]
    fn test_skip_without_sensor() {
        let mode = ShootMode::Timelapse;
        assert_eq!(Role::Mode.step(1, mode), Role::Exposure);
        assert_eq!(Role::Exposure.step(-1, mode), Role::Mode);
    }

    #[test]
    fn test_zero_delta_stays() {
        assert_eq!(Role::Count.step(0, ShootMode::Timelapse), Role::Count);
    }

    proptest! {
        #[test]
        fn prop_timelapse_never_lands_on_sensor(
            start in 0usize..Role::COUNT,
            moves in proptest::collection::vec(prop_oneof![Just(-1i8), Just(1i8)], 0..40),
        ) {
            let mut role = Role::ALL[start];
            for delta in moves {
                role = role.step(delta, ShootMode::Timelapse);
                prop_assert!(!role.is_sensor_only());
            }
        }

        #[test]
        fn prop_full_cycle_with_sensor(start in 0usize..Role::COUNT) {
            let mut role = Role::ALL[start];
            for _ in 0..Role::COUNT {
                role = role.step(1, ShootMode::SensorTrigger);
            }
            prop_assert_eq!(role, Role::ALL[start]);
        }
    }
}
