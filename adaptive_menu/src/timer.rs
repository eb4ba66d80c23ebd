// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// A fixed-period timer driven by a host-supplied monotonic clock.
///
/// The host passes its current time to [`due`](Self::due), which reports how
/// many periods have elapsed since the last call. Nothing sleeps or spawns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Duration,
}

impl IntervalTimer {
    /// A timer started at `start`; the first tick is due one period later.
    ///
    /// Periods shorter than a millisecond are raised to one millisecond.
    pub fn new(period: Duration, start: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: start.saturating_add(period),
        }
    }

    /// Tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time of the next tick.
    pub fn next_due(&self) -> Duration {
        self.next_due
    }

    /// Number of ticks due at `now`, consuming them.
    ///
    /// Time going backwards yields zero. The count saturates at `u32::MAX`.
    pub fn due(&mut self, now: Duration) -> u32 {
        let Some(late) = now.checked_sub(self.next_due) else {
            return 0;
        };
        let periods = late.as_nanos() / self.period.as_nanos() + 1;
        let ticks = u32::try_from(periods).unwrap_or(u32::MAX);
        self.next_due = self
            .next_due
            .saturating_add(self.period.saturating_mul(ticks));
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn counts_whole_periods() {
        let mut timer = IntervalTimer::new(ms(40), ms(0));
        assert_eq!(timer.due(ms(39)), 0);
        assert_eq!(timer.due(ms(40)), 1);
        assert_eq!(timer.due(ms(100)), 1);
        assert_eq!(timer.due(ms(200)), 3);
        assert_eq!(timer.next_due(), ms(240));
    }

    #[test]
    fn going_backwards_is_ignored() {
        let mut timer = IntervalTimer::new(ms(40), ms(1000));
        assert_eq!(timer.due(ms(10)), 0);
        assert_eq!(timer.due(ms(1040)), 1);
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut timer = IntervalTimer::new(Duration::ZERO, ms(0));
        assert_eq!(timer.period(), ms(1));
        assert_eq!(timer.due(ms(5)), 5);
    }

    #[test]
    fn long_gaps_are_counted_without_stepping() {
        let mut timer = IntervalTimer::new(ms(40), ms(0));
        assert_eq!(timer.due(ms(40_000_000)), 1_000_000);
        assert_eq!(timer.next_due(), ms(40_000_040));

        let mut timer = IntervalTimer::new(ms(40), ms(0));
        assert_eq!(timer.due(Duration::MAX), u32::MAX);
        assert_eq!(timer.next_due(), ms(40) + ms(40) * u32::MAX);
        assert_eq!(timer.due(ms(40)), 0);
    }
}
