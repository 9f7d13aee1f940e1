//! Countdown computation from a target date/time pair and a wall-clock now.
//!
//! The public tick path (`compute`) never faults: every unusable input is
//! resolved to the expired state, with malformed text logged. Callers that
//! need to tell "expired" apart from "invalid input" use `try_compute`.

use chrono::{DateTime, Local, NaiveDate};
use thiserror::Error;

use crate::utils::date::parse_time_of_day;

use super::models::{CountdownState, TargetMoment};

/// Backend date columns arrive as plain calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ways a countdown target can fail to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    #[error("target date or time of day is missing")]
    MissingInput,

    #[error("malformed target date: {0:?}")]
    InvalidDate(String),

    #[error("malformed time of day: {0:?}")]
    InvalidTimeOfDay(String),

    #[error("date and time do not form a valid local instant")]
    UnrepresentableInstant,
}

/// Resolve the raw date and time-of-day text into a target moment.
pub fn resolve_target(target_date: &str, target_time: &str) -> Result<TargetMoment, CountdownError> {
    let target_date = target_date.trim();
    let target_time = target_time.trim();
    if target_date.is_empty() || target_time.is_empty() {
        return Err(CountdownError::MissingInput);
    }

    let date = NaiveDate::parse_from_str(target_date, DATE_FORMAT)
        .map_err(|_| CountdownError::InvalidDate(target_date.to_string()))?;
    let (hours, minutes) = parse_time_of_day(target_time)
        .ok_or_else(|| CountdownError::InvalidTimeOfDay(target_time.to_string()))?;

    Ok(TargetMoment::new(date, hours, minutes))
}

/// Compute the countdown to the target, distinguishing failure causes.
pub fn try_compute(
    target_date: &str,
    target_time: &str,
    now: DateTime<Local>,
) -> Result<CountdownState, CountdownError> {
    let target = resolve_target(target_date, target_time)?;
    let instant = target
        .instant()
        .ok_or(CountdownError::UnrepresentableInstant)?;

    let difference_ms = instant.signed_duration_since(now).num_milliseconds();
    Ok(CountdownState::from_remaining_ms(difference_ms))
}

/// Compute the countdown for one tick, resolving every failure to the
/// expired state so the tick path never raises past this boundary.
pub fn compute(target_date: &str, target_time: &str, now: DateTime<Local>) -> CountdownState {
    match try_compute(target_date, target_time, now) {
        Ok(state) => state,
        // Articles without a schedule hit this every tick.
        Err(CountdownError::MissingInput) => CountdownState::EXPIRED,
        Err(err) => {
            log::warn!("Countdown target unusable ({err}), treating as expired");
            CountdownState::EXPIRED
        }
    }
}
