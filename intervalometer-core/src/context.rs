//! Application context and the blocking-wait session
//!
//! [`Context`] owns the board, clock and display together with the button
//! state. It is created once by the entry point and lent to the manager on
//! every tick.
//!
//! A [`Session`] borrows the context for the duration of a shoot sequence,
//! together with the backlight setting. Every blocking wait polls input
//! through it, so the user can cancel with Prev or adjust the backlight
//! with Inc/Dec at any time.

use core::fmt::Write;

use heapless::String;
use intervalometer_display::{TextDisplay, DISPLAY_COLS};
use intervalometer_hal::{elapsed_ms, Clock};

use crate::config::TimingConfig;
use crate::format::fixed;
use crate::input::{Button, ButtonManager, Throttle};
use crate::scheduler::ShootMode;
use crate::settings::{Cancelled, Setting};
use crate::traits::Board;

/// Hardware plus input state
pub struct Context<B, C, D> {
    /// Pin-level I/O
    pub board: B,
    /// Millisecond clock
    pub clock: C,
    /// Text display
    pub display: D,
    buttons: ButtonManager,
    throttle: Throttle,
    /// Last level written to the backlight
    backlight_level: Option<u8>,
    countdown_margin_ms: u32,
}

impl<B: Board, C: Clock, D: TextDisplay> Context<B, C, D> {
    /// Bundle the hardware with fresh input state
    pub fn new(board: B, clock: C, display: D, timing: TimingConfig) -> Self {
        Self {
            board,
            clock,
            display,
            buttons: ButtonManager::new(),
            throttle: Throttle::new(timing.input_interval_ms),
            backlight_level: None,
            countdown_margin_ms: timing.countdown_margin_ms,
        }
    }

    /// Button state as of the last sample
    pub fn buttons(&self) -> &ButtonManager {
        &self.buttons
    }

    /// Sample the buttons if the throttle window is open
    ///
    /// Returns true if a sample was taken.
    pub fn sample_buttons(&mut self) -> bool {
        let now = self.clock.now_ms();
        if !self.throttle.ready(now) {
            return false;
        }

        self.buttons.update(&mut self.board, now);
        true
    }

    /// Write the backlight level if it changed
    pub fn apply_backlight(&mut self, level: i32) {
        let level = level.clamp(0, u8::MAX as i32) as u8;
        if self.backlight_level == Some(level) {
            return;
        }

        trace!("Backlight {}", level);
        self.board.set_backlight(level);
        self.backlight_level = Some(level);
    }

    /// Last level written to the backlight
    pub fn backlight_level(&self) -> Option<u8> {
        self.backlight_level
    }
}

/// Outcome of one input poll during a blocking wait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Poll {
    /// Prev was pressed: abort the wait
    pub cancel: bool,
    /// Next was pressed: toggle the live readout
    pub toggle: bool,
}

/// Context lent to a running shoot sequence
pub struct Session<'a, B, C, D> {
    ctx: &'a mut Context<B, C, D>,
    backlight: &'a mut Setting,
    mode: ShootMode,
    remaining_shots: Option<u32>,
}

impl<'a, B: Board, C: Clock, D: TextDisplay> Session<'a, B, C, D> {
    /// Start a session
    pub fn new(ctx: &'a mut Context<B, C, D>, backlight: &'a mut Setting, mode: ShootMode) -> Self {
        Self {
            ctx,
            backlight,
            mode,
            remaining_shots: None,
        }
    }

    /// Shooting mode fixed at sequence start
    pub fn mode(&self) -> ShootMode {
        self.mode
    }

    pub fn board(&mut self) -> &mut B {
        &mut self.ctx.board
    }

    pub fn display(&mut self) -> &mut D {
        &mut self.ctx.display
    }

    pub fn now_ms(&self) -> u32 {
        self.ctx.clock.now_ms()
    }

    /// Shots still to come, shown next to the countdown
    pub fn remaining_shots(&self) -> Option<u32> {
        self.remaining_shots
    }

    pub fn set_remaining_shots(&mut self, remaining: Option<u32>) {
        self.remaining_shots = remaining;
    }

    /// Throttled input check
    ///
    /// When the throttle window is open, samples the buttons and lets a held
    /// Inc/Dec adjust the backlight. Otherwise returns an empty [`Poll`].
    pub fn check_input(&mut self) -> Poll {
        if !self.ctx.sample_buttons() {
            return Poll::default();
        }

        let buttons = self.ctx.buttons();
        let inc = buttons.down(Button::Inc).then(|| buttons.hold_duration(Button::Inc));
        let dec = buttons.down(Button::Dec).then(|| buttons.hold_duration(Button::Dec));
        let poll = Poll {
            cancel: buttons.pressed(Button::Prev),
            toggle: buttons.pressed(Button::Next),
        };

        if let Some(hold) = inc {
            self.backlight.inc(hold, &mut self.ctx.board);
        } else if let Some(hold) = dec {
            self.backlight.dec(hold, &mut self.ctx.board);
        }
        self.ctx.apply_backlight(self.backlight.get());

        poll
    }

    /// Cancellable wait of `duration_ms`, showing the time left
    ///
    /// Rendering stops `countdown_margin_ms` before the deadline; the rest
    /// is slept out without polling.
    pub fn countdown(&mut self, label: &str, duration_ms: u32) -> Result<(), Cancelled> {
        self.ctx.display.clear();
        self.ctx.display.print_at(0, 0, label);

        let render_until = duration_ms.saturating_sub(self.ctx.countdown_margin_ms);
        let mut stopwatch = Stopwatch::start(self.ctx.clock.now_ms());

        loop {
            let elapsed = stopwatch.lap(self.ctx.clock.now_ms());
            if elapsed >= render_until {
                break;
            }

            if self.check_input().cancel {
                debug!("Countdown cancelled after {} ms", elapsed);
                return Err(Cancelled);
            }

            self.render_remaining(duration_ms - elapsed);
        }

        let rest = duration_ms.saturating_sub(stopwatch.lap(self.ctx.clock.now_ms()));
        if rest > 0 {
            self.ctx.clock.sleep_ms(rest);
        }

        Ok(())
    }

    fn render_remaining(&mut self, remaining_ms: u32) {
        let time = fixed(remaining_ms.min(i32::MAX as u32) as i32, 3);
        let mut row: String<{ DISPLAY_COLS as usize }> = String::new();

        match self.remaining_shots {
            Some(shots) => {
                let mut count: String<10> = String::new();
                let _ = write!(count, "{}", shots);
                let _ = write!(row, "{:<16}", time.as_str());
                self.ctx.display.print_at(0, 1, &row);
                self.ctx.display.print_right(1, &count);
            }
            None => {
                let _ = write!(row, "{:>16}", time.as_str());
                self.ctx.display.print_at(0, 1, &row);
            }
        }
    }
}

/// Accumulates elapsed time across clock wraps
struct Stopwatch {
    last_ms: u32,
    elapsed_ms: u32,
}

impl Stopwatch {
    fn start(now_ms: u32) -> Self {
        Self {
            last_ms: now_ms,
            elapsed_ms: 0,
        }
    }

    /// Total elapsed at `now_ms`; a wrapped interval adds nothing
    fn lap(&mut self, now_ms: u32) -> u32 {
        let delta = elapsed_ms(self.last_ms, now_ms).unwrap_or(0);
        self.last_ms = now_ms;
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta);
        self.elapsed_ms
    }
}
