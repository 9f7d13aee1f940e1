use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::date::local_instant;

/// Remaining time until a card's event instant, decomposed for display.
///
/// When `is_expired` is true every numeric field is zero; the moment of
/// transition does not preserve a final non-zero reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownState {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub is_expired: bool,
}

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// A countdown "day" is exactly 24 hours; no month or DST awareness.
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

impl CountdownState {
    /// Terminal state: the target has passed or could not be determined.
    pub const EXPIRED: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        is_expired: true,
    };

    /// Decompose a millisecond difference into whole days, hours, minutes,
    /// and seconds by strict floor division at each level.
    pub(crate) fn from_remaining_ms(difference_ms: i64) -> Self {
        if difference_ms <= 0 {
            return Self::EXPIRED;
        }

        let days = difference_ms / MS_PER_DAY;
        let rest = difference_ms % MS_PER_DAY;
        let hours = rest / MS_PER_HOUR;
        let rest = rest % MS_PER_HOUR;
        let minutes = rest / MS_PER_MINUTE;
        let seconds = (rest % MS_PER_MINUTE) / MS_PER_SECOND;

        Self {
            days,
            hours,
            minutes,
            seconds,
            is_expired: false,
        }
    }

    /// Total remaining time in whole seconds.
    pub fn total_seconds(&self) -> i64 {
        ((self.days * 24 + self.hours) * 60 + self.minutes) * 60 + self.seconds
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::EXPIRED
    }
}

/// Target event moment: a calendar date plus an hour and minute, combined
/// into a single local instant with seconds and milliseconds zeroed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetMoment {
    pub date: NaiveDate,
    pub hours: u32,
    pub minutes: u32,
}

impl TargetMoment {
    pub fn new(date: NaiveDate, hours: u32, minutes: u32) -> Self {
        Self {
            date,
            hours,
            minutes,
        }
    }

    /// The concrete local instant, or `None` when the combination does not
    /// exist on the local clock.
    pub fn instant(&self) -> Option<DateTime<Local>> {
        local_instant(self.date, self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_state_is_all_zeros() {
        let state = CountdownState::EXPIRED;
        assert_eq!(state.days, 0);
        assert_eq!(state.hours, 0);
        assert_eq!(state.minutes, 0);
        assert_eq!(state.seconds, 0);
        assert!(state.is_expired);
    }

    #[test]
    fn decomposition_uses_fixed_day_buckets() {
        // 2 days, 3 hours, 4 minutes, 5 seconds
        let ms = 2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 5 * MS_PER_SECOND;
        let state = CountdownState::from_remaining_ms(ms);
        assert_eq!(state.days, 2);
        assert_eq!(state.hours, 3);
        assert_eq!(state.minutes, 4);
        assert_eq!(state.seconds, 5);
        assert!(!state.is_expired);
    }

    #[test]
    fn sub_second_remainder_truncates() {
        let state = CountdownState::from_remaining_ms(1_999);
        assert_eq!(state.seconds, 1);
        assert_eq!(state.total_seconds(), 1);
    }

    #[test]
    fn zero_and_negative_differences_expire() {
        assert!(CountdownState::from_remaining_ms(0).is_expired);
        assert!(CountdownState::from_remaining_ms(-5_000).is_expired);
    }

    #[test]
    fn target_moment_resolves_to_instant() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let target = TargetMoment::new(date, 14, 0);
        assert!(target.instant().is_some());
    }
}
