//! Log update engine.
//!
//! Every mutation of the entry collection is a [`LogUpdate`]: a pure
//! transform from the freshly loaded entries to the entries to store, plus a
//! report for the caller. Nothing here touches the filesystem; the store
//! runs the transform and only persists the result when it succeeds.
//!
//! After every successful update the collection holds at most one entry per
//! date, is sorted most recent first, and at most one work period (the last
//! one of its entry) is open.

use crate::errors::{AppError, AppResult};
use crate::models::{Assembly, BuildLogEntry, TimePeriod};
use crate::utils::date::{format_date_for_log, human_date};
use crate::utils::time::{ceil_minutes, format_kitchen, same_day_kitchen_time_diff};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

pub trait LogUpdate {
    type Report;

    fn apply(self, entries: Vec<BuildLogEntry>) -> AppResult<(Vec<BuildLogEntry>, Self::Report)>;
}

/// Position of the entry logged on `date`, if any.
pub fn find_entry(entries: &[BuildLogEntry], date: NaiveDate) -> Option<usize> {
    entries.iter().position(|e| e.date == date)
}

/// Most recent date first.
pub fn sort_entries(entries: &mut [BuildLogEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Fails when any entry other than the one on `date` still has an open period.
fn reject_open_elsewhere(entries: &[BuildLogEntry], date: NaiveDate) -> AppResult<()> {
    match entries
        .iter()
        .filter(|e| e.date != date)
        .find_map(|e| e.open_period().map(|p| (e, p)))
    {
        Some((entry, period)) => Err(AppError::OpenElsewhere {
            date: entry.date_str(),
            start: period.start_time.clone(),
        }),
        None => Ok(()),
    }
}

// ------------------------------------------------
// Insert
// ------------------------------------------------

/// Add a complete entry, optionally replacing the one already on its date.
pub struct Insert {
    pub entry: BuildLogEntry,
    pub overwrite: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Appended,
    Replaced,
}

impl LogUpdate for Insert {
    type Report = InsertOutcome;

    fn apply(
        self,
        mut entries: Vec<BuildLogEntry>,
    ) -> AppResult<(Vec<BuildLogEntry>, InsertOutcome)> {
        let outcome = match find_entry(&entries, self.entry.date) {
            Some(_) if !self.overwrite => {
                return Err(AppError::EntryExists(self.entry.date_str()));
            }
            Some(index) => {
                entries[index] = self.entry;
                InsertOutcome::Replaced
            }
            None => {
                entries.push(self.entry);
                InsertOutcome::Appended
            }
        };

        sort_entries(&mut entries);
        debug!(?outcome, count = entries.len(), "insert applied");
        Ok((entries, outcome))
    }
}

// ------------------------------------------------
// Start
// ------------------------------------------------

/// Open a new work period at `now`.
pub struct Start {
    /// Required only when no entry exists yet for today and there is no
    /// earlier entry to inherit the assembly from.
    pub assembly: Option<Assembly>,
    pub now: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartReport {
    pub date: NaiveDate,
    pub start_time: String,
    pub assembly: Assembly,
    /// True when today's entry was created by this start.
    pub created_entry: bool,
}

impl LogUpdate for Start {
    type Report = StartReport;

    fn apply(self, mut entries: Vec<BuildLogEntry>) -> AppResult<(Vec<BuildLogEntry>, StartReport)> {
        let date = self.now.date();
        let start_time = format_kitchen(&self.now.time());
        sort_entries(&mut entries);

        if let Some(open) = find_entry(&entries, date).and_then(|i| entries[i].open_period()) {
            let elapsed = same_day_kitchen_time_diff(&start_time, &open.start_time)?;
            return Err(AppError::AlreadyStarted {
                start: open.start_time.clone(),
                minutes: ceil_minutes(elapsed).max(0),
            });
        }
        reject_open_elsewhere(&entries, date)?;

        let period = TimePeriod::open(start_time.clone());

        let report = match find_entry(&entries, date) {
            Some(index) => {
                let entry = &mut entries[index];
                entry.work_periods.push(period);
                StartReport {
                    date,
                    start_time,
                    assembly: entry.assembly,
                    created_entry: false,
                }
            }
            None => {
                // Entries are sorted, so the first one is the most recent day worked.
                let assembly = self
                    .assembly
                    .or_else(|| entries.first().map(|e| e.assembly))
                    .ok_or(AppError::NoAssemblyToInherit)?;

                entries.push(BuildLogEntry::new(assembly, date, vec![period]));
                sort_entries(&mut entries);
                StartReport {
                    date,
                    start_time,
                    assembly,
                    created_entry: true,
                }
            }
        };

        debug!(date = %format_date_for_log(date), start = %report.start_time, "start applied");
        Ok((entries, report))
    }
}

// ------------------------------------------------
// Stop
// ------------------------------------------------

/// Close today's open work period at `now`.
pub struct Stop {
    pub now: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopReport {
    pub date: NaiveDate,
    pub period: TimePeriod,
    /// Sum over all of the day's periods, including the one just closed.
    pub total_minutes: i64,
}

impl LogUpdate for Stop {
    type Report = StopReport;

    fn apply(self, mut entries: Vec<BuildLogEntry>) -> AppResult<(Vec<BuildLogEntry>, StopReport)> {
        let date = self.now.date();
        let index = find_entry(&entries, date)
            .ok_or_else(|| AppError::NoEntry(format!("today ({})", human_date(date))))?;
        let entry = &mut entries[index];

        let period = entry.work_periods.last_mut().ok_or_else(|| {
            AppError::Consistency(
                "Log entry exists for today but there are no work periods. Run 'start' to begin working."
                    .to_string(),
            )
        })?;
        if !period.is_open() {
            return Err(AppError::AlreadyStopped {
                end: period.end_time.clone().unwrap_or_default(),
            });
        }

        let end_time = format_kitchen(&self.now.time());
        let elapsed = same_day_kitchen_time_diff(&end_time, &period.start_time)?;
        if elapsed < chrono::TimeDelta::zero() {
            return Err(AppError::InvalidTime(format!(
                "Stop time {end_time} is before start time {}",
                period.start_time
            )));
        }

        period.end_time = Some(end_time);
        period.duration_min = ceil_minutes(elapsed);
        let period = period.clone();
        let total_minutes = entry.total_minutes();

        sort_entries(&mut entries);
        debug!(date = %format_date_for_log(date), total_minutes, "stop applied");
        Ok((
            entries,
            StopReport {
                date,
                period,
                total_minutes,
            },
        ))
    }
}
