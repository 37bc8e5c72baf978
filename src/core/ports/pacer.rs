use std::thread;
use std::time::Duration;

/// Delay capability used to pace animations.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

/// Blocks the calling thread for the requested duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleepPacer;

impl Pacer for ThreadSleepPacer {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelayPacer;

impl Pacer for NoDelayPacer {
    #[inline]
    fn pause(&mut self, _duration: Duration) {}
}

/// Returns immediately but remembers every requested delay.
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    pauses: Vec<Duration>,
}

impl RecordingPacer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
