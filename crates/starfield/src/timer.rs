//! Fixed-period timer driven by host time.
//!
//! The host polls once per frame; there is no background thread. Ticks missed
//! while the host was busy collapse into a single firing.

use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Interval {
    period: Duration,
    next_due: Option<Duration>,
}

impl Interval {
    /// A stopped interval. A zero period is bumped to 1 ms.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    /// First firing one period after `now`.
    pub fn start(&mut self, now: Duration) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// True if a tick came due at or before `now`.
    pub fn poll(&mut self, now: Duration) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        // Skip every period that already passed, stay on the original phase
        let missed = (now - due).as_nanos() / self.period.as_nanos();
        let advance = self.period.as_nanos() * (missed + 1);
        self.next_due = Some(due + Duration::from_nanos(advance as u64));
        true
    }
}
