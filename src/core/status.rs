use crate::errors::AppResult;
use crate::models::BuildLogEntry;
use crate::utils::time::{ceil_minutes, format_kitchen, same_day_kitchen_time_diff};
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayStatus {
    NotLogged,
    /// A period is running; `elapsed_minutes` is only known for today.
    Open {
        start: String,
        elapsed_minutes: Option<i64>,
        logged_minutes: i64,
    },
    Closed {
        total_minutes: i64,
        periods: usize,
    },
}

/// What the log says about `date`, as seen at `now`.
pub fn day_status(
    entries: &[BuildLogEntry],
    date: NaiveDate,
    now: NaiveDateTime,
) -> AppResult<DayStatus> {
    let Some(entry) = entries.iter().find(|e| e.date == date) else {
        return Ok(DayStatus::NotLogged);
    };

    match entry.open_period() {
        Some(open) => {
            let elapsed_minutes = if date == now.date() {
                let diff = same_day_kitchen_time_diff(&format_kitchen(&now.time()), &open.start_time)?;
                Some(ceil_minutes(diff))
            } else {
                None
            };
            Ok(DayStatus::Open {
                start: open.start_time.clone(),
                elapsed_minutes,
                logged_minutes: entry.total_minutes(),
            })
        }
        None => Ok(DayStatus::Closed {
            total_minutes: entry.total_minutes(),
            periods: entry.work_periods.len(),
        }),
    }
}
