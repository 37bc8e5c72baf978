use std::fmt;
use std::time::{Duration, Instant};

/// Wall-clock time measured by a kernel run on the monotonic clock.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Elapsed(Duration);

impl Elapsed {
    #[must_use]
    pub fn since(start: Instant) -> Self {
        Self(start.elapsed())
    }

    #[must_use]
    pub const fn from_duration(duration: Duration) -> Self {
        Self(duration)
    }

    #[must_use]
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    /// Fractional milliseconds at microsecond resolution.
    #[must_use]
    pub fn as_millis_f64(&self) -> f64 {
        self.0.as_micros() as f64 / 1000.0
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} ms", self.as_millis_f64())
    }
}
