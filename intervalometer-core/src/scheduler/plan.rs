//! Per-sequence shot plan

use super::mode::ShootMode;

/// Parameters fixed at the start of a shoot sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShotPlan {
    /// Mode read at sequence start
    pub mode: ShootMode,
    /// Number of exposures
    pub count: u32,
    /// Wait after each exposure except the last (ms)
    pub inter_shot_ms: u32,
}

impl ShotPlan {
    /// Build a plan from raw setting values
    ///
    /// The trigger delay is part of the interval, so the pause between
    /// shots is the interval minus the delay, floored at zero. Negative
    /// inputs count as zero.
    pub fn new(mode: ShootMode, count: i32, interval_ms: i32, trigger_delay_ms: i32) -> Self {
        let interval = interval_ms.max(0) as u32;
        let delay = trigger_delay_ms.max(0) as u32;

        Self {
            mode,
            count: count.max(0) as u32,
            inter_shot_ms: interval.saturating_sub(delay),
        }
    }

    /// True if shot number `shot` (0-based) waits for the sensor first
    pub fn waits_for_sensor(&self, shot: u32) -> bool {
        self.mode.waits_for_sensor(shot)
    }

    /// True if another shot follows shot number `shot`
    pub fn has_next(&self, shot: u32) -> bool {
        shot.saturating_add(1) < self.count
    }
}
