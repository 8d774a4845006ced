use std::time::{Duration, Instant};

/// Paces calls to [`Game::advance()`][crate::Game::advance] without driving
/// them itself.
///
/// The clock is armed on demand: the first call to [`deadline()`]
/// [TickClock::deadline] after construction, a [`finish_tick()`]
/// [TickClock::finish_tick], or a [`cancel()`][TickClock::cancel] schedules
/// the next tick one period from now.  The caller waits out
/// [`remaining()`][TickClock::remaining] (typically while polling for
/// input), advances the game, and calls `finish_tick()`.  Cancelling while
/// paused means a pause of any length never causes a burst of catch-up
/// ticks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TickClock {
    period: Duration,
    next: Option<Instant>,
}

impl TickClock {
    pub fn new(period: Duration) -> TickClock {
        TickClock { period, next: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Change the period.  An already-armed deadline is unaffected; the new
    /// period applies from the next arming.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    /// The instant the next tick is due, arming the clock if necessary
    pub fn deadline(&mut self) -> Instant {
        *self
            .next
            .get_or_insert_with(|| Instant::now() + self.period)
    }

    /// Time left until the next tick is due; zero once the deadline has
    /// passed
    pub fn remaining(&mut self) -> Duration {
        self.deadline().saturating_duration_since(Instant::now())
    }

    /// Mark the pending tick as delivered, so the next [`deadline()`]
    /// [TickClock::deadline] schedules a fresh one
    pub fn finish_tick(&mut self) {
        self.next = None;
    }

    /// Drop the pending deadline without delivering a tick, e.g. when the
    /// session pauses
    pub fn cancel(&mut self) {
        self.next = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_is_stable_while_armed() {
        let mut clock = TickClock::new(Duration::from_secs(3600));
        let deadline = clock.deadline();
        assert_eq!(clock.deadline(), deadline);
        assert_eq!(clock.deadline(), deadline);
    }

    #[test]
    fn remaining_is_at_most_one_period() {
        let mut clock = TickClock::new(Duration::from_secs(3600));
        let remaining = clock.remaining();
        assert!(remaining <= Duration::from_secs(3600));
        assert!(remaining > Duration::from_secs(3599));
    }

    #[test]
    fn finish_tick_rearms() {
        let mut clock = TickClock::new(Duration::from_secs(3600));
        let first = clock.deadline();
        clock.finish_tick();
        assert!(clock.deadline() >= first);
    }

    #[test]
    fn elapsed_deadline_reports_zero_remaining() {
        let mut clock = TickClock::new(Duration::ZERO);
        let _ = clock.deadline();
        assert_eq!(clock.remaining(), Duration::ZERO);
    }

    #[test]
    fn set_period_applies_on_next_arming() {
        let mut clock = TickClock::new(Duration::from_secs(3600));
        let _ = clock.deadline();
        clock.set_period(Duration::ZERO);
        assert!(clock.remaining() > Duration::ZERO);
        clock.cancel();
        assert_eq!(clock.remaining(), Duration::ZERO);
    }
}
