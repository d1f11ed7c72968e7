//! Event countdown.

use std::time::Duration;

use chrono::NaiveDateTime;

use crate::timer::Interval;

pub const EVENT_STARTED: &str = "Event Started!";

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// `"{d}d {h}h {m}m {s}s"` until `target`, `"Event Started!"` from then on.
pub fn format_countdown(target: NaiveDateTime, now: NaiveDateTime) -> String {
    let remaining = target.signed_duration_since(now);
    if remaining <= chrono::TimeDelta::zero() {
        return EVENT_STARTED.to_owned();
    }
    let total = remaining.num_seconds();
    let days = total / SECS_PER_DAY;
    let hours = (total % SECS_PER_DAY) / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;
    format!("{}d {}h {}m {}s", days, hours, mins, secs)
}

/// Text glow blur radius in px, pulsing 2..8 around 5.
#[inline]
pub fn countdown_glow(elapsed_ms: f64) -> f32 {
    (5.0 + (elapsed_ms * 0.01).sin() * 3.0) as f32
}

/// Countdown text refreshed on a fixed interval.
#[derive(Clone, Debug)]
pub struct Countdown {
    target: NaiveDateTime,
    interval: Interval,
    text: String,
    glow_px: f32,
}

impl Countdown {
    pub fn new(target: NaiveDateTime, period: Duration) -> Self {
        Self {
            target,
            interval: Interval::new(period),
            text: String::new(),
            glow_px: countdown_glow(0.0),
        }
    }

    /// Start ticking and fill in the text right away.
    pub fn start(&mut self, now: Duration, wall_now: NaiveDateTime) {
        self.interval.start(now);
        self.refresh(now, wall_now);
    }

    pub fn stop(&mut self) {
        self.interval.stop();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.interval.is_running()
    }

    /// Poll the interval. Returns true when the text was recomputed.
    pub fn tick(&mut self, now: Duration, wall_now: NaiveDateTime) -> bool {
        if !self.interval.poll(now) {
            return false;
        }
        self.refresh(now, wall_now);
        true
    }

    fn refresh(&mut self, now: Duration, wall_now: NaiveDateTime) {
        self.text = format_countdown(self.target, wall_now);
        if self.text != EVENT_STARTED {
            self.glow_px = countdown_glow(now.as_secs_f64() * 1000.0);
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn glow_px(&self) -> f32 {
        self.glow_px
    }

    /// CSS `text-shadow` for the current glow.
    pub fn text_shadow(&self) -> String {
        format!("0 0 {}px rgba(110,231,255,0.7)", self.glow_px)
    }

    #[inline]
    pub fn target(&self) -> NaiveDateTime {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn target() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 18)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_format_days_hours_mins_secs() {
        let before = TimeDelta::days(2)
            + TimeDelta::hours(3)
            + TimeDelta::minutes(4)
            + TimeDelta::seconds(5);
        assert_eq!(format_countdown(target(), target() - before), "2d 3h 4m 5s");
    }

    #[test]
    fn test_sub_second_remainder_is_floored() {
        let now = target() - TimeDelta::milliseconds(61_999);
        assert_eq!(format_countdown(target(), now), "0d 0h 1m 1s");
    }

    #[test]
    fn test_started_at_and_after_target() {
        assert_eq!(format_countdown(target(), target()), EVENT_STARTED);
        assert_eq!(
            format_countdown(target(), target() + TimeDelta::days(400)),
            EVENT_STARTED
        );
    }

    #[test]
    fn test_glow_range() {
        for ms in (0..10_000).step_by(37) {
            let g = countdown_glow(ms as f64);
            assert!((2.0..=8.0).contains(&g));
        }
        assert_eq!(countdown_glow(0.0), 5.0);
    }

    #[test]
    fn test_countdown_ticks_once_per_second() {
        let mut countdown = Countdown::new(target(), Duration::from_secs(1));
        let wall = target() - TimeDelta::seconds(10);
        countdown.start(Duration::ZERO, wall);
        assert_eq!(countdown.text(), "0d 0h 0m 10s");

        assert!(!countdown.tick(Duration::from_millis(500), wall));
        assert!(countdown.tick(Duration::from_secs(1), wall + TimeDelta::seconds(1)));
        assert_eq!(countdown.text(), "0d 0h 0m 9s");

        countdown.stop();
        assert!(!countdown.tick(Duration::from_secs(5), wall + TimeDelta::seconds(5)));
        assert_eq!(countdown.text(), "0d 0h 0m 9s");
    }

    #[test]
    fn test_text_shadow_format() {
        let countdown = Countdown::new(target(), Duration::from_secs(1));
        assert_eq!(countdown.text_shadow(), "0 0 5px rgba(110,231,255,0.7)");
    }
}
