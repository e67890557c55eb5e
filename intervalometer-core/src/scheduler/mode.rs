//! Shooting modes

/// How exposures are triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShootMode {
    /// Fixed interval, sensor unused
    #[default]
    Timelapse,
    /// Wait for the sensor once, then run on the fixed interval
    SensorThenTimelapse,
    /// Wait for the sensor before every shot (level crossing)
    SensorEachShot,
    /// Wait for a fresh sensor edge before every shot
    SensorTrigger,
}

impl ShootMode {
    /// Modes in menu order
    pub const ALL: [ShootMode; 4] = [
        ShootMode::Timelapse,
        ShootMode::SensorThenTimelapse,
        ShootMode::SensorEachShot,
        ShootMode::SensorTrigger,
    ];

    /// Menu text, indexed like [`ShootMode::ALL`]
    pub const LABELS: [&'static str; 4] = [
        "Timelapse",
        "Sensor>Timelapse",
        "Sensor+Timelapse",
        "Sensor Trigger",
    ];

    /// Mode for a menu index; out-of-range falls back to timelapse
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Menu index
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Menu text
    pub const fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    /// True if any shot waits for the sensor
    pub const fn uses_sensor(self) -> bool {
        !matches!(self, ShootMode::Timelapse)
    }

    /// True if the sensor must leave the tripped region before firing again
    pub const fn rearms_on_edge(self) -> bool {
        matches!(self, ShootMode::SensorTrigger)
    }

    /// True if shot number `shot` (0-based) waits for the sensor
    pub const fn waits_for_sensor(self, shot: u32) -> bool {
        match self {
            ShootMode::Timelapse => false,
            ShootMode::SensorThenTimelapse => shot == 0,
            ShootMode::SensorEachShot | ShootMode::SensorTrigger => true,
        }
    }
}
