//! Input rate limiting

use intervalometer_hal::elapsed_ms;

/// Opens at most one window per `interval_ms`
///
/// The first call always opens a window. A clock wrap also opens one and
/// restarts timing from the wrapped value.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: u32,
    last_ms: Option<u32>,
}

impl Throttle {
    /// Create a throttle
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Minimum spacing between windows
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Returns true if a new window opens at `now_ms`
    pub fn ready(&mut self, now_ms: u32) -> bool {
        let waiting = match self.last_ms {
            Some(last) => matches!(elapsed_ms(last, now_ms), Some(elapsed) if elapsed < self.interval_ms),
            None => false,
        };

        if waiting {
            return false;
        }

        self.last_ms = Some(now_ms);
        true
    }
}
