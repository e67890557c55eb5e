//! Sensor trigger setting
//!
//! The threshold is an ordinary numeric range over the raw sensor domain.
//! Before every adjustment the armed direction is recomputed from the
//! threshold as it stands and a live reading: a threshold above the reading
//! arms for a rising signal, anything else for a falling one.
//!
//! Executing the setting blocks until the sensor trips or the user cancels.
//! Two firing rules exist:
//!
//! - **Level**: fire on the first sample beyond the threshold.
//! - **Edge**: fire only when the previous sample was clear of the
//!   threshold and the current one is beyond it, so a sensor that stays
//!   tripped does not fire again.
//!
//! "Beyond" is strict (`>` rising, `<` falling) while "clear" includes the
//! threshold itself (`<=` rising, `>=` falling).

use core::fmt::Write;

use heapless::String;
use intervalometer_display::TextDisplay;
use intervalometer_hal::Clock;

use super::numeric::NumericRange;
use super::Cancelled;
use crate::config::{ConfigError, RangeSpec};
use crate::context::Session;
use crate::traits::Board;

/// Which way the signal must cross the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Fire when the reading rises above the threshold
    #[default]
    Rising,
    /// Fire when the reading falls below the threshold
    Falling,
}

impl Direction {
    /// Direction armed by `threshold` given a live `sample`
    pub fn armed_for(threshold: i32, sample: u16) -> Self {
        if threshold > i32::from(sample) {
            Direction::Rising
        } else {
            Direction::Falling
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Rising => "Rising",
            Direction::Falling => "Falling",
        }
    }

    fn beyond(self, threshold: i32, sample: i32) -> bool {
        match self {
            Direction::Rising => sample > threshold,
            Direction::Falling => sample < threshold,
        }
    }

    fn clear(self, threshold: i32, sample: i32) -> bool {
        match self {
            Direction::Rising => sample <= threshold,
            Direction::Falling => sample >= threshold,
        }
    }
}

/// Stateful trip detector for one wait
#[derive(Debug, Clone)]
pub struct TriggerDetector {
    threshold: i32,
    direction: Direction,
    rearm: bool,
    previous: Option<u16>,
}

impl TriggerDetector {
    /// Create a detector; `rearm` selects the edge rule
    pub fn new(threshold: i32, direction: Direction, rearm: bool) -> Self {
        Self {
            threshold,
            direction,
            rearm,
            previous: None,
        }
    }

    /// Feed one sample, returns true if it trips
    pub fn feed(&mut self, sample: u16) -> bool {
        let previous = self.previous.replace(sample);
        let current = i32::from(sample);

        if !self.direction.beyond(self.threshold, current) {
            return false;
        }
        if !self.rearm {
            return true;
        }

        previous.is_some_and(|p| self.direction.clear(self.threshold, i32::from(p)))
    }
}

/// Threshold setting that waits for the sensor when executed
#[derive(Debug, Clone)]
pub struct SensorTrigger {
    range: NumericRange,
    direction: Direction,
    last_sample: u16,
    /// A wait is in progress
    executing: bool,
    /// Show the live reading while waiting (otherwise the panel stays blank)
    live: bool,
}

impl SensorTrigger {
    pub fn new(spec: &RangeSpec) -> Result<Self, ConfigError> {
        Ok(Self {
            range: NumericRange::new(spec)?,
            direction: Direction::default(),
            last_sample: 0,
            executing: false,
            live: false,
        })
    }

    pub fn range(&self) -> &NumericRange {
        &self.range
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Most recent sensor reading seen by this setting
    pub fn last_sample(&self) -> u16 {
        self.last_sample
    }

    pub fn is_executing(&self) -> bool {
        self.executing
    }

    pub fn inc<B: Board>(&mut self, hold_ms: u32, board: &mut B) {
        self.arm(board);
        self.range.inc(hold_ms);
    }

    pub fn dec<B: Board>(&mut self, hold_ms: u32, board: &mut B) {
        self.arm(board);
        self.range.dec(hold_ms);
    }

    /// Direction from the unadjusted threshold against a fresh reading
    fn arm<B: Board>(&mut self, board: &mut B) {
        let sample = board.read_sensor();
        self.last_sample = sample;
        self.direction = Direction::armed_for(self.range.get(), sample);
        debug!(
            "Armed {} at {} (sensor {})",
            self.direction.as_str(),
            self.range.get(),
            sample
        );
    }

    pub fn reset(&mut self) {
        self.range.reset();
        self.direction = Direction::default();
    }

    /// Editing screen, or the readout while waiting
    ///
    /// While waiting this is a partial redraw: nothing is cleared and
    /// nothing is drawn at all unless the live readout is on.
    pub fn draw<D: TextDisplay>(&self, display: &mut D) {
        if self.executing {
            if self.live {
                let mut reading: String<8> = String::new();
                let _ = write!(reading, "{:>6}", self.last_sample);
                display.print_at(0, 0, self.range.label());
                display.print_right(1, &reading);
            }
            return;
        }

        self.range.draw(display);
        display.print_at(0, 1, self.direction.as_str());
    }

    /// Block until the sensor trips
    pub fn execute<B, C, D>(&mut self, session: &mut Session<'_, B, C, D>) -> Result<(), Cancelled>
    where
        B: Board,
        C: Clock,
        D: TextDisplay,
    {
        self.executing = true;
        self.live = false;
        session.display().clear();

        let result = self.watch(session);

        self.executing = false;
        self.live = false;
        result
    }

    fn watch<B, C, D>(&mut self, session: &mut Session<'_, B, C, D>) -> Result<(), Cancelled>
    where
        B: Board,
        C: Clock,
        D: TextDisplay,
    {
        let rearm = session.mode().rearms_on_edge();
        let mut detector = TriggerDetector::new(self.range.get(), self.direction, rearm);
        debug!(
            "Waiting for sensor: threshold {}, {}, rearm {}",
            self.range.get(),
            self.direction.as_str(),
            rearm
        );

        loop {
            let sample = session.board().read_sensor();
            self.last_sample = sample;

            let poll = session.check_input();
            if poll.cancel {
                debug!("Sensor wait cancelled");
                return Err(Cancelled);
            }
            if poll.toggle {
                self.live = !self.live;
                session.display().clear();
            }

            if detector.feed(sample) {
                info!("Sensor tripped at {}", sample);
                return Ok(());
            }

            self.draw(session.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Button;
    use crate::scheduler::ShootMode;
    use crate::settings::Setting;
    use crate::testing::{context, sim};
    use intervalometer_display::Screen;
    use proptest::prelude::*;

    fn threshold(default: i32) -> SensorTrigger {
        SensorTrigger::new(&RangeSpec::new("Sensor Level", 0, 1023, 0, 1, default)).unwrap()
    }

    fn backlight() -> Setting {
        Setting::Numeric(NumericRange::new(&RangeSpec::new("Backlight", 0, 255, 0, 1, 128)).unwrap())
    }

    fn fires(detector: &mut TriggerDetector, samples: &[u16]) -> Vec<usize> {
        samples
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| detector.feed(s).then_some(i))
            .collect()
    }

    #[test]
    fn test_edge_rearm_rising() {
        let mut detector = TriggerDetector::new(10, Direction::Rising, true);
        assert_eq!(fires(&mut detector, &[5, 15, 5, 15]), vec![1, 3]);
    }

    #[test]
    fn test_edge_never_fires_twice_while_tripped() {
        let mut detector = TriggerDetector::new(10, Direction::Rising, true);
        assert_eq!(fires(&mut detector, &[5, 15, 15, 15, 11]), vec![1]);
    }

    #[test]
    fn test_edge_needs_history() {
        let mut detector = TriggerDetector::new(10, Direction::Rising, true);
        assert_eq!(fires(&mut detector, &[15, 15, 5, 15]), vec![3]);
    }

    #[test]
    fn test_edge_threshold_counts_as_clear() {
        let mut detector = TriggerDetector::new(10, Direction::Rising, true);
        assert_eq!(fires(&mut detector, &[10, 11]), vec![1]);

        let mut detector = TriggerDetector::new(10, Direction::Falling, true);
        assert_eq!(fires(&mut detector, &[10, 9, 10, 10, 3]), vec![1, 4]);
    }

    #[test]
    fn test_level_fires_on_first_sample_beyond() {
        let mut detector = TriggerDetector::new(10, Direction::Rising, false);
        assert_eq!(fires(&mut detector, &[15, 10, 11]), vec![0, 2]);

        let mut detector = TriggerDetector::new(10, Direction::Falling, false);
        assert_eq!(fires(&mut detector, &[10, 9]), vec![1]);
    }

    #[test]
    fn test_direction_follows_live_sample() {
        let (mut board, _clock) = sim();
        let mut sensor = threshold(500);

        board.script(&[100]);
        sensor.inc(0, &mut board);
        assert_eq!(sensor.direction(), Direction::Rising);
        assert_eq!(sensor.range().get(), 501);

        board.script(&[900]);
        sensor.dec(0, &mut board);
        assert_eq!(sensor.direction(), Direction::Falling);
        assert_eq!(sensor.last_sample(), 900);

        board.script(&[499]);
        sensor.dec(0, &mut board);
        assert_eq!(sensor.range().get(), 499);
        assert_eq!(sensor.direction(), Direction::Rising);
    }

    #[test]
    fn test_direction_uses_threshold_before_step() {
        let (mut board, _clock) = sim();
        let mut sensor = threshold(512);

        board.script(&[512]);
        sensor.inc(0, &mut board);
        assert_eq!(sensor.range().get(), 513);
        assert_eq!(sensor.direction(), Direction::Falling);

        board.script(&[513]);
        sensor.dec(0, &mut board);
        assert_eq!(sensor.range().get(), 512);
        assert_eq!(sensor.direction(), Direction::Falling);
    }

    #[test]
    fn test_reset_restores_default() {
        let (mut board, _clock) = sim();
        let mut sensor = threshold(500);
        board.script(&[900]);
        sensor.inc(0, &mut board);
        sensor.reset();

        assert_eq!(sensor.range().get(), 500);
        assert_eq!(sensor.direction(), Direction::Rising);
    }

    #[test]
    fn test_draw_editing() {
        let sensor = threshold(512);
        let mut screen = Screen::new();
        sensor.draw(&mut screen);

        assert_eq!(screen.text(0), "Sensor Level");
        assert_eq!(screen.line(1), Some("Rising       512"));
    }

    #[test]
    fn test_execute_level_fires() {
        let mut ctx = context();
        ctx.board.script(&[100, 200, 600, 50]);
        let mut light = backlight();
        let mut sensor = threshold(512);

        let mut session = Session::new(&mut ctx, &mut light, ShootMode::SensorEachShot);
        assert_eq!(sensor.execute(&mut session), Ok(()));
        assert!(!sensor.is_executing());
        assert_eq!(ctx.board.sensor_reads, 3);
    }

    #[test]
    fn test_execute_edge_waits_for_clear() {
        let mut ctx = context();
        ctx.board.script(&[600, 600, 100, 600]);
        let mut light = backlight();
        let mut sensor = threshold(512);

        let mut session = Session::new(&mut ctx, &mut light, ShootMode::SensorTrigger);
        assert_eq!(sensor.execute(&mut session), Ok(()));
        assert_eq!(ctx.board.sensor_reads, 4);
    }

    #[test]
    fn test_execute_cancel_clears_flags() {
        let mut ctx = context();
        ctx.board.sensor_idle = 0;
        ctx.board.hold(Button::Prev, 300, 500);
        let mut light = backlight();
        let mut sensor = threshold(512);

        let mut session = Session::new(&mut ctx, &mut light, ShootMode::SensorEachShot);
        assert_eq!(sensor.execute(&mut session), Err(Cancelled));
        assert!(!sensor.is_executing());
    }

    #[test]
    fn test_toggle_shows_live_reading() {
        let mut ctx = context();
        ctx.board.sensor_idle = 42;
        ctx.board.hold(Button::Next, 100, 200);
        ctx.board.hold(Button::Prev, 600, 800);
        let mut light = backlight();
        let mut sensor = threshold(512);

        let mut session = Session::new(&mut ctx, &mut light, ShootMode::SensorEachShot);
        assert_eq!(sensor.execute(&mut session), Err(Cancelled));

        assert_eq!(ctx.display.text(0), "Sensor Level");
        assert_eq!(ctx.display.text(1), "42");
    }

    #[test]
    fn test_blank_while_waiting() {
        let mut ctx = context();
        ctx.board.hold(Button::Prev, 300, 500);
        let mut light = backlight();
        let mut sensor = threshold(512);

        let mut session = Session::new(&mut ctx, &mut light, ShootMode::SensorEachShot);
        assert_eq!(sensor.execute(&mut session), Err(Cancelled));

        assert_eq!(ctx.display.text(0), "");
        assert_eq!(ctx.display.text(1), "");
    }

    proptest! {
        #[test]
        fn prop_edge_fires_only_after_clear(
            threshold in 0i32..1024,
            rising in any::<bool>(),
            samples in proptest::collection::vec(0u16..1024, 0..64),
        ) {
            let direction = if rising { Direction::Rising } else { Direction::Falling };
            let mut edge = TriggerDetector::new(threshold, direction, true);
            let mut level = TriggerDetector::new(threshold, direction, false);
            let mut previous: Option<u16> = None;

            for sample in samples {
                let edge_fired = edge.feed(sample);
                let level_fired = level.feed(sample);

                if edge_fired {
                    prop_assert!(level_fired);
                    let p = previous.map(i32::from);
                    prop_assert!(p.is_some_and(|p| !direction.beyond(threshold, p)));
                }
                previous = Some(sample);
            }
        }
    }
}
