//! Millisecond clock abstraction

/// Monotonic millisecond clock with a blocking sleep
///
/// `now_ms` wraps at `u32::MAX` (about 49.7 days). Callers that measure
/// elapsed time must go through [`elapsed_ms`] so a rollover is treated as
/// "elapsed unknown" rather than a huge or negative duration.
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> u32;

    /// Block the calling thread for `ms` milliseconds
    fn sleep_ms(&mut self, ms: u32);
}

/// Milliseconds from `last` to `now`
///
/// Returns `None` when `now < last`, meaning the counter wrapped and the
/// caller should resynchronize on `now`.
pub fn elapsed_ms(last: u32, now: u32) -> Option<u32> {
    now.checked_sub(last)
}
