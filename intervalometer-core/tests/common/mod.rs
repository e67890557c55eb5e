//! Shared test infrastructure for intervalometer-core integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use intervalometer_core::{
    Board, Button, Context, IntervalometerConfig, Role, TimelapseManager,
};
use intervalometer_display::Screen;
use intervalometer_hal::Clock;

// ============================================================================
// Mock Clock
// ============================================================================

/// Shared millisecond timeline
pub type Timeline = Rc<Cell<u32>>;

/// Clock advancing 1 ms per read; sleeping jumps ahead
pub struct MockClock {
    now: Timeline,
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(1));
        now
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

// ============================================================================
// Mock Board
// ============================================================================

/// Output line written by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Focus(bool),
    Shutter(bool),
    SensorPower(bool),
    Backlight(u8),
}

/// Everything the board saw, for assertions after the board is lent out
#[derive(Debug, Default)]
pub struct Record {
    /// Output writes with their timestamps
    pub events: Vec<(u32, Output)>,
    /// Timestamps of sensor reads
    pub sensor_reads: Vec<u32>,
}

impl Record {
    /// Timestamps where the shutter opened
    pub fn shutter_opens(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter(|(_, o)| *o == Output::Shutter(true))
            .map(|(t, _)| *t)
            .collect()
    }

    /// Last value written to each output
    pub fn last(&self, pick: fn(&Output) -> Option<bool>) -> Option<bool> {
        self.events.iter().rev().find_map(|(_, o)| pick(o))
    }

    pub fn backlight_levels(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|(_, o)| match o {
                Output::Backlight(level) => Some(*level),
                _ => None,
            })
            .collect()
    }
}

/// A button held over `from..until`
#[derive(Debug, Clone, Copy)]
struct Press {
    button: Button,
    from: u32,
    until: u32,
}

/// Board with scripted buttons and sensor readings
pub struct MockBoard {
    now: Timeline,
    presses: Vec<Press>,
    sensor: VecDeque<u16>,
    sensor_idle: u16,
    record: Rc<RefCell<Record>>,
}

impl Board for MockBoard {
    fn button_is_high(&mut self, button: Button) -> bool {
        let now = self.now.get();
        !self
            .presses
            .iter()
            .any(|p| p.button == button && (p.from..p.until).contains(&now))
    }

    fn read_sensor(&mut self) -> u16 {
        self.record.borrow_mut().sensor_reads.push(self.now.get());
        self.sensor.pop_front().unwrap_or(self.sensor_idle)
    }

    fn set_focus(&mut self, active: bool) {
        self.log(Output::Focus(active));
    }

    fn set_shutter(&mut self, active: bool) {
        self.log(Output::Shutter(active));
    }

    fn set_sensor_power(&mut self, on: bool) {
        self.log(Output::SensorPower(on));
    }

    fn set_backlight(&mut self, level: u8) {
        self.log(Output::Backlight(level));
    }
}

impl MockBoard {
    fn log(&mut self, output: Output) {
        let now = self.now.get();
        self.record.borrow_mut().events.push((now, output));
    }
}

// ============================================================================
// Rig
// ============================================================================

/// Builder for a manager plus context on simulated hardware
pub struct Rig {
    now: Timeline,
    presses: Vec<Press>,
    sensor: VecDeque<u16>,
    sensor_idle: u16,
    config: IntervalometerConfig,
}

impl Rig {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(0)),
            presses: Vec::new(),
            sensor: VecDeque::new(),
            sensor_idle: 0,
            config: IntervalometerConfig::default(),
        }
    }

    /// Hold `button` while `from <= now < until`
    pub fn press(mut self, button: Button, from: u32, until: u32) -> Self {
        self.presses.push(Press {
            button,
            from,
            until,
        });
        self
    }

    /// Start the timeline at `ms` instead of 0
    pub fn start_at(self, ms: u32) -> Self {
        self.now.set(ms);
        self
    }

    /// Sensor readings in order; afterwards reads return `idle`
    pub fn sensor(mut self, samples: &[u16], idle: u16) -> Self {
        self.sensor = samples.iter().copied().collect();
        self.sensor_idle = idle;
        self
    }

    pub fn config(mut self, edit: impl FnOnce(&mut IntervalometerConfig)) -> Self {
        edit(&mut self.config);
        self
    }

    pub fn build(self) -> Built {
        let record = Rc::new(RefCell::new(Record::default()));
        let board = MockBoard {
            now: Rc::clone(&self.now),
            presses: self.presses,
            sensor: self.sensor,
            sensor_idle: self.sensor_idle,
            record: Rc::clone(&record),
        };
        let clock = MockClock {
            now: Rc::clone(&self.now),
        };
        let manager = match TimelapseManager::new(&self.config) {
            Ok(manager) => manager,
            Err(e) => panic!("invalid test config: {}", e),
        };

        Built {
            ctx: Context::new(board, clock, Screen::new(), self.config.timing),
            manager,
            record,
            now: self.now,
        }
    }
}

/// A ready-to-run manager and context
pub struct Built {
    pub ctx: Context<MockBoard, MockClock, Screen>,
    pub manager: TimelapseManager,
    pub record: Rc<RefCell<Record>>,
    now: Timeline,
}

impl Built {
    /// Current simulated time without advancing it
    pub fn now(&self) -> u32 {
        self.now.get()
    }

    /// Jump the timeline forward
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// Run UI ticks until the timeline reaches `until`
    pub fn run_until(&mut self, until: u32) -> Vec<intervalometer_core::ShootSummary> {
        let mut summaries = Vec::new();
        while self.now() < until {
            if let Some(summary) = self.manager.update(&mut self.ctx) {
                summaries.push(summary);
            }
        }
        summaries
    }

    /// Move the editing cursor to `role` by stepping forward
    pub fn select(&mut self, role: Role) {
        for _ in 0..Role::COUNT {
            if self.manager.active() == role {
                return;
            }
            self.manager.change_setting(1);
        }
        panic!("{:?} not reachable in mode {:?}", role, self.manager.mode());
    }

    pub fn screen(&self) -> &Screen {
        &self.ctx.display
    }
}
