//! Timelapse manager
//!
//! Owns the eight settings and the index of the one being edited. One call
//! to [`TimelapseManager::update`] is one UI tick; confirming the start
//! prompt runs the whole shoot sequence from inside that tick.

use intervalometer_display::TextDisplay;
use intervalometer_hal::Clock;

use crate::config::{ConfigError, IntervalometerConfig};
use crate::context::{Context, Session};
use crate::input::Button;
use crate::scheduler::{ShootMode, ShotPlan};
use crate::settings::{
    Cancelled, CyclicOption, Edit, NumericRange, SensorTrigger, Setting, ShootPrompt, ShutterTiming,
};
use crate::state::Role;
use crate::traits::Board;

/// Outcome of a shoot sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShootSummary {
    /// Shot count at sequence start
    pub requested: u32,
    /// Exposures completed
    pub taken: u32,
    /// The user aborted the sequence
    pub cancelled: bool,
}

/// Action chosen for one UI tick
#[derive(Debug, Clone, Copy)]
enum Action {
    Inc(u32),
    Dec(u32),
    Prev,
    Next,
    Idle,
}

/// Menu state plus the shoot sequence
pub struct TimelapseManager {
    settings: [Setting; Role::COUNT],
    active: Role,
}

impl TimelapseManager {
    /// Build every setting from `config`
    pub fn new(config: &IntervalometerConfig) -> Result<Self, ConfigError> {
        let settings = [
            Setting::Numeric(NumericRange::new(&config.backlight)?),
            Setting::Choice(CyclicOption::new(
                config.mode_label,
                &ShootMode::LABELS,
                config.default_mode.index(),
            )?),
            Setting::Sensor(SensorTrigger::new(&config.threshold)?),
            Setting::Numeric(NumericRange::new(&config.trigger_delay)?),
            Setting::Shutter(ShutterTiming::new(&config.exposure)?),
            Setting::Numeric(NumericRange::new(&config.interval)?),
            Setting::Numeric(NumericRange::new(&config.count)?),
            Setting::Prompt(ShootPrompt::new(config.prompt_label)?),
        ];

        Ok(Self {
            settings,
            active: Role::Backlight,
        })
    }

    /// Setting being edited
    pub fn active(&self) -> Role {
        self.active
    }

    pub fn setting(&self, role: Role) -> &Setting {
        &self.settings[role.index()]
    }

    pub fn setting_mut(&mut self, role: Role) -> &mut Setting {
        &mut self.settings[role.index()]
    }

    /// Current shooting mode
    pub fn mode(&self) -> ShootMode {
        ShootMode::from_index(self.setting(Role::Mode).get().max(0) as usize)
    }

    /// Every setting back to its default, editing the first one
    pub fn reset_all(&mut self) {
        for setting in self.settings.iter_mut() {
            setting.reset();
        }
        self.active = Role::Backlight;
    }

    /// Apply the backlight and draw the first screen
    pub fn begin<B: Board, C: Clock, D: TextDisplay>(&mut self, ctx: &mut Context<B, C, D>) {
        info!("Intervalometer ready, mode {}", self.mode().label());
        ctx.apply_backlight(self.setting(Role::Backlight).get());
        self.setting(self.active).draw(&mut ctx.display);
    }

    /// Move the editing cursor by one in direction `delta`
    pub fn change_setting(&mut self, delta: i8) {
        self.active = self.active.step(delta, self.mode());
        trace!("Editing {}", self.setting(self.active).label());
    }

    /// One UI tick
    ///
    /// Does nothing until the input throttle opens. Then performs at most
    /// one action, in priority order: Inc held, Dec held, Prev pressed,
    /// Next pressed. Returns the summary if the tick ran a shoot sequence.
    pub fn update<B, C, D>(&mut self, ctx: &mut Context<B, C, D>) -> Option<ShootSummary>
    where
        B: Board,
        C: Clock,
        D: TextDisplay,
    {
        if !ctx.sample_buttons() {
            return None;
        }

        let mut summary = None;
        match Self::action(ctx) {
            Action::Inc(hold) => {
                if self.setting_mut(self.active).inc(hold, &mut ctx.board) == Edit::Shoot {
                    summary = Some(self.shoot(ctx));
                }
            }
            Action::Dec(hold) => {
                self.setting_mut(self.active).dec(hold, &mut ctx.board);
            }
            Action::Prev => self.change_setting(-1),
            Action::Next => self.change_setting(1),
            Action::Idle => {}
        }

        ctx.apply_backlight(self.setting(Role::Backlight).get());
        self.setting(self.active).draw(&mut ctx.display);
        summary
    }

    fn action<B: Board, C: Clock, D: TextDisplay>(ctx: &Context<B, C, D>) -> Action {
        let buttons = ctx.buttons();
        if buttons.down(Button::Inc) {
            Action::Inc(buttons.hold_duration(Button::Inc))
        } else if buttons.down(Button::Dec) {
            Action::Dec(buttons.hold_duration(Button::Dec))
        } else if buttons.pressed(Button::Prev) {
            Action::Prev
        } else if buttons.pressed(Button::Next) {
            Action::Next
        } else {
            Action::Idle
        }
    }

    /// Run the shoot sequence
    ///
    /// Mode, shot count, interval and trigger delay are read once at the
    /// start. Any cancellation ends the sequence at once.
    pub fn shoot<B, C, D>(&mut self, ctx: &mut Context<B, C, D>) -> ShootSummary
    where
        B: Board,
        C: Clock,
        D: TextDisplay,
    {
        let plan = ShotPlan::new(
            self.mode(),
            self.setting(Role::Count).get(),
            self.setting(Role::Interval).get(),
            self.setting(Role::TriggerDelay).get(),
        );
        info!(
            "Shoot: {} shots, mode {}, {} ms between shots",
            plan.count,
            plan.mode.label(),
            plan.inter_shot_ms
        );

        let [backlight, _, sensor, trigger_delay, exposure, interval, _, _] = &mut self.settings;
        let steps = Steps {
            sensor,
            trigger_delay,
            exposure,
            interval_label: interval.label(),
        };

        let mut session = Session::new(ctx, backlight, plan.mode);
        let mut taken = 0;
        let result = steps.run(&plan, &mut session, &mut taken);

        let summary = ShootSummary {
            requested: plan.count,
            taken,
            cancelled: result.is_err(),
        };
        if summary.cancelled {
            info!("Shoot cancelled after {} of {} shots", taken, plan.count);
        } else {
            info!("Shoot complete: {} shots", taken);
        }
        summary
    }
}

/// Settings executed by the sequence, borrowed apart from the backlight
struct Steps<'a> {
    sensor: &'a mut Setting,
    trigger_delay: &'a mut Setting,
    exposure: &'a mut Setting,
    interval_label: &'static str,
}

impl Steps<'_> {
    fn run<B, C, D>(
        mut self,
        plan: &ShotPlan,
        session: &mut Session<'_, B, C, D>,
        taken: &mut u32,
    ) -> Result<(), Cancelled>
    where
        B: Board,
        C: Clock,
        D: TextDisplay,
    {
        let mut remaining = plan.count;

        for shot in 0..plan.count {
            remaining -= 1;
            session.set_remaining_shots(Some(remaining));

            if plan.waits_for_sensor(shot) {
                self.sensor.execute(session)?;
                self.trigger_delay.execute(session)?;
            }

            self.exposure.execute(session)?;
            *taken += 1;
            debug!("Shot {} of {} taken", shot + 1, plan.count);

            if plan.has_next(shot) {
                session.countdown(self.interval_label, plan.inter_shot_ms)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::context;

    fn manager() -> TimelapseManager {
        TimelapseManager::new(&IntervalometerConfig::default()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let manager = manager();
        assert_eq!(manager.active(), Role::Backlight);
        assert_eq!(manager.mode(), ShootMode::Timelapse);
        assert_eq!(manager.setting(Role::Count).get(), 10);
        assert_eq!(manager.setting(Role::Threshold).label(), "Sensor Level");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = IntervalometerConfig::default();
        config.count.default = 0;
        assert_eq!(
            TimelapseManager::new(&config).err(),
            Some(ConfigError::DefaultOutOfRange { label: "Shots" })
        );
    }

    #[test]
    fn test_change_setting_skips_sensor_in_timelapse() {
        let mut manager = manager();
        manager.change_setting(1);
        assert_eq!(manager.active(), Role::Mode);
        manager.change_setting(1);
        assert_eq!(manager.active(), Role::Exposure);
    }

    #[test]
    fn test_change_setting_visits_sensor_when_used() {
        let mut manager = manager();
        let (mut board, _clock) = crate::testing::sim();
        manager.setting_mut(Role::Mode).inc(0, &mut board);
        assert_eq!(manager.mode(), ShootMode::SensorThenTimelapse);

        manager.change_setting(1);
        manager.change_setting(1);
        assert_eq!(manager.active(), Role::Threshold);
    }

    #[test]
    fn test_reset_all() {
        let mut manager = manager();
        let (mut board, _clock) = crate::testing::sim();
        manager.setting_mut(Role::Count).inc(2_500, &mut board);
        manager.change_setting(-1);
        manager.reset_all();

        assert_eq!(manager.setting(Role::Count).get(), 10);
        assert_eq!(manager.active(), Role::Backlight);
    }

    #[test]
    fn test_update_waits_for_throttle() {
        let mut ctx = context();
        let mut manager = manager();

        assert_eq!(manager.update(&mut ctx), None);
        assert_eq!(ctx.display.text(0), "Backlight");

        ctx.display.mark_clean();
        manager.update(&mut ctx);
        assert!(!ctx.display.is_dirty());
    }

    #[test]
    fn test_begin_applies_backlight() {
        let mut ctx = context();
        let mut manager = manager();
        manager.begin(&mut ctx);

        assert_eq!(ctx.board.backlight_writes, vec![128]);
        assert_eq!(ctx.display.text(0), "Backlight");
        assert_eq!(ctx.display.text(1), "128");
    }

    #[test]
    fn test_timelapse_shoot() {
        let mut ctx = context();
        let mut manager = manager();
        let (mut board, _clock) = crate::testing::sim();
        for _ in 0..7 {
            manager.setting_mut(Role::Count).dec(0, &mut board);
        }

        let summary = manager.shoot(&mut ctx);
        assert_eq!(
            summary,
            ShootSummary {
                requested: 3,
                taken: 3,
                cancelled: false
            }
        );

        // 3 x 100 ms exposures plus 2 x 5000 ms intervals
        let now = ctx.clock.now_ms();
        assert!(now >= 10_300);
        assert!(now < 10_400);
        assert!(!ctx.board.shutter);
        assert_eq!(ctx.board.sensor_reads, 0);
    }
}
