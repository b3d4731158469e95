use std::time::{Duration, Instant};

/// Times a single operation.
pub trait Clock {
    /// Runs `op`, returning its output and the time attributed to it.
    fn time<T>(&self, op: impl FnOnce() -> T) -> (T, Duration);
}

/// Wall-clock timer bracketing only the closure it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl Clock for WallClock {
    fn time<T>(&self, op: impl FnOnce() -> T) -> (T, Duration) {
        let start = Instant::now();
        let out = op();
        (out, start.elapsed())
    }
}

/// Reports the same duration for every operation.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Duration);

impl Clock for FixedClock {
    fn time<T>(&self, op: impl FnOnce() -> T) -> (T, Duration) {
        (op(), self.0)
    }
}

/// Milliseconds with sub-millisecond precision kept.
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
