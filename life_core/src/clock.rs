// clock.rs - Fixed-interval step accumulator

use std::time::Duration;

/// Default real time between generations while running.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_secs(1);

/// Turns elapsed frame time into a number of whole simulation steps.
///
/// Time is accumulated across ticks; every full interval becomes one step
/// and the remainder carries over, so a long frame catches up rather than
/// skipping generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepClock {
    interval: Duration,
    pending: Duration,
}

impl StepClock {
    /// # Panics
    /// If `interval` is zero.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "step interval must be non-zero");
        Self { interval, pending: Duration::ZERO }
    }

    pub fn interval(&self) -> Duration { self.interval }

    /// Time accumulated towards the next step.
    pub fn pending(&self) -> Duration { self.pending }

    /// # Panics
    /// If `interval` is zero.
    pub fn set_interval(&mut self, interval: Duration) {
        assert!(!interval.is_zero(), "step interval must be non-zero");
        self.interval = interval;
    }

    pub fn reset(&mut self) {
        self.pending = Duration::ZERO;
    }

    /// Adds `elapsed` and returns how many whole intervals are now due.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        self.pending += elapsed;
        let due = self.pending.as_nanos() / self.interval.as_nanos();
        let steps = u32::try_from(due).unwrap_or(u32::MAX);
        self.pending -= self.interval * steps;
        steps
    }
}

impl Default for StepClock {
    fn default() -> Self { Self::new(DEFAULT_STEP_INTERVAL) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_intervals() {
        let mut clock = StepClock::default();
        assert_eq!(clock.tick(Duration::from_millis(400)), 0);
        assert_eq!(clock.tick(Duration::from_millis(400)), 0);
        assert_eq!(clock.tick(Duration::from_millis(400)), 1);
        assert_eq!(clock.pending(), Duration::from_millis(200));
    }

    #[test]
    fn test_catches_up_on_long_frame() {
        let mut clock = StepClock::new(Duration::from_millis(250));
        assert_eq!(clock.tick(Duration::from_millis(1100)), 4);
        assert_eq!(clock.pending(), Duration::from_millis(100));
    }

    #[test]
    fn test_interval_change_keeps_pending() {
        let mut clock = StepClock::default();
        clock.tick(Duration::from_millis(600));
        clock.set_interval(Duration::from_millis(200));
        assert_eq!(clock.tick(Duration::ZERO), 3);
        assert_eq!(clock.pending(), Duration::ZERO);
    }

    #[test]
    fn test_reset_drops_pending() {
        let mut clock = StepClock::default();
        clock.tick(Duration::from_millis(900));
        clock.reset();
        assert_eq!(clock.tick(Duration::from_millis(500)), 0);
    }

    #[test]
    #[should_panic]
    fn test_zero_interval_panics() {
        StepClock::new(Duration::ZERO);
    }
}
