//! Blocking clock from an `embedded-hal` delay

use embedded_hal::delay::DelayNs;
use intervalometer_hal::Clock;

/// [`Clock`] from a delay provider and a millisecond counter
///
/// `now` usually reads a free-running hardware timer; it may wrap.
pub struct DelayClock<D, F> {
    delay: D,
    now: F,
}

impl<D, F> DelayClock<D, F>
where
    D: DelayNs,
    F: Fn() -> u32,
{
    pub fn new(delay: D, now: F) -> Self {
        Self { delay, now }
    }
}

impl<D, F> Clock for DelayClock<D, F>
where
    D: DelayNs,
    F: Fn() -> u32,
{
    fn now_ms(&self) -> u32 {
        (self.now)()
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
