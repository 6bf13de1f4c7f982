//! Time utilities: kitchen clock parsing, work-period arguments, minute math.

use crate::errors::{AppError, AppResult};
use crate::models::time_period::TimePeriod;
use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};
use regex::Regex;
use std::sync::OnceLock;

fn kitchen_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(\d+)(:\d\d)?(AM|PM)$").expect("kitchen time pattern is valid")
    })
}

/// Parse `<digits>[:digits]<AM|PM>` on the given calendar date, in UTC.
///
/// `12` maps to 0 before the AM/PM shift, so `12AM` is midnight and `12PM`
/// is noon. Hours above 23 or minutes above 59 after the shift are rejected.
pub fn parse_kitchen_time(date: NaiveDate, kitchen: &str) -> AppResult<DateTime<Utc>> {
    let invalid = || AppError::InvalidTime(format!("Invalid time: {kitchen}"));

    let caps = kitchen_pattern().captures(kitchen).ok_or_else(invalid)?;

    let mut hours: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minutes: u32 = match caps.get(2) {
        Some(m) => m.as_str()[1..].parse().map_err(|_| invalid())?,
        None => 0,
    };

    if hours == 12 {
        hours = 0;
    }
    if caps[3].eq_ignore_ascii_case("PM") {
        hours = hours.checked_add(12).ok_or_else(invalid)?;
    }
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    let naive = date.and_hms_opt(hours, minutes, 0).ok_or_else(invalid)?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// 12-hour clock rendering without seconds, e.g. `3:04PM`.
pub fn format_kitchen<T: Timelike>(t: &T) -> String {
    let (pm, hour) = t.hour12();
    format!("{}:{:02}{}", hour, t.minute(), if pm { "PM" } else { "AM" })
}

/// Elapsed time between two kitchen times assumed to fall on the same day.
pub fn same_day_kitchen_time_diff(end: &str, start: &str) -> AppResult<TimeDelta> {
    let reference = NaiveDate::default();
    let end = parse_kitchen_time(reference, end)?;
    let start = parse_kitchen_time(reference, start)?;
    Ok(end - start)
}

/// Whole minutes in `d`, rounded up.
pub fn ceil_minutes(d: TimeDelta) -> i64 {
    let secs = d.num_seconds();
    secs.div_euclid(60) + i64::from(secs.rem_euclid(60) != 0)
}

/// Parse `START-END[,START-END...]` into closed work periods, in the order given.
pub fn parse_work_periods_arg(date: NaiveDate, arg: &str) -> AppResult<Vec<TimePeriod>> {
    let mut periods = Vec::new();

    for token in arg.split(',') {
        let (raw_start, raw_end) = match *token.split('-').collect::<Vec<_>>().as_slice() {
            [s, e] => (s.trim(), e.trim()),
            _ => {
                return Err(AppError::InvalidTime(format!(
                    "Time period '{token}' must consist of both a start time and an end time"
                )));
            }
        };

        let start = parse_kitchen_time(date, raw_start)
            .map_err(|_| AppError::InvalidTime(format!("Bad start time: {raw_start}")))?;
        let end = parse_kitchen_time(date, raw_end)
            .map_err(|_| AppError::InvalidTime(format!("Bad end time: {raw_end}")))?;

        if start > end {
            return Err(AppError::InvalidTime(format!(
                "Start time {raw_start} is after end time {raw_end}"
            )));
        }

        periods.push(TimePeriod::closed(
            format_kitchen(&start),
            format_kitchen(&end),
            ceil_minutes(end - start),
        ));
    }

    Ok(periods)
}
