//! Simulated hardware for unit tests

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use intervalometer_display::Screen;
use intervalometer_hal::Clock;

use crate::config::TimingConfig;
use crate::context::Context;
use crate::input::Button;
use crate::traits::Board;

/// Clock that advances 1 ms per read and jumps on sleep
pub struct SimClock {
    now: Rc<Cell<u32>>,
}

impl SimClock {
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(1));
        now
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.advance(ms);
    }
}

/// Board with scripted buttons and sensor, sharing time with a [`SimClock`]
pub struct SimBoard {
    now: Rc<Cell<u32>>,
    holds: Vec<(Button, u32, u32)>,
    pub sensor: VecDeque<u16>,
    pub sensor_idle: u16,
    pub sensor_reads: u32,
    pub focus: bool,
    pub shutter: bool,
    pub sensor_power: bool,
    pub backlight_writes: Vec<u8>,
}

impl SimBoard {
    /// Hold `button` while `from <= now < until`
    pub fn hold(&mut self, button: Button, from: u32, until: u32) {
        self.holds.push((button, from, until));
    }

    /// Queue sensor samples; once drained, reads return `sensor_idle`
    pub fn script(&mut self, samples: &[u16]) {
        self.sensor.extend(samples.iter().copied());
    }
}

impl Board for SimBoard {
    fn button_is_high(&mut self, button: Button) -> bool {
        let now = self.now.get();
        !self
            .holds
            .iter()
            .any(|&(b, from, until)| b == button && (from..until).contains(&now))
    }

    fn read_sensor(&mut self) -> u16 {
        self.sensor_reads += 1;
        self.sensor.pop_front().unwrap_or(self.sensor_idle)
    }

    fn set_focus(&mut self, active: bool) {
        self.focus = active;
    }

    fn set_shutter(&mut self, active: bool) {
        self.shutter = active;
    }

    fn set_sensor_power(&mut self, on: bool) {
        self.sensor_power = on;
    }

    fn set_backlight(&mut self, level: u8) {
        self.backlight_writes.push(level);
    }
}

/// Board and clock on a shared timeline starting at 0
pub fn sim() -> (SimBoard, SimClock) {
    let now = Rc::new(Cell::new(0));
    let board = SimBoard {
        now: Rc::clone(&now),
        holds: Vec::new(),
        sensor: VecDeque::new(),
        sensor_idle: 0,
        sensor_reads: 0,
        focus: false,
        shutter: false,
        sensor_power: true,
        backlight_writes: Vec::new(),
    };
    (board, SimClock { now })
}

/// Context over simulated hardware with default timing
pub fn context() -> Context<SimBoard, SimClock, Screen> {
    let (board, clock) = sim();
    Context::new(board, clock, Screen::new(), TimingConfig::default())
}
