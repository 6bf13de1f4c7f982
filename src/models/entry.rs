use super::{assembly::Assembly, time_period::TimePeriod};
use crate::utils::date::{self, log_layout};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything worked on a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildLogEntry {
    pub assembly: Assembly,
    #[serde(with = "log_layout")]
    pub date: NaiveDate,
    #[serde(default, rename = "work_period")]
    pub work_periods: Vec<TimePeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Relative to the logs directory, e.g. `2022-Feb/2022-Feb-08.md`.
    pub details_file: String,
}

impl BuildLogEntry {
    pub fn new(assembly: Assembly, date: NaiveDate, work_periods: Vec<TimePeriod>) -> Self {
        Self {
            assembly,
            date,
            work_periods,
            title: None,
            tags: Vec::new(),
            details_file: crate::core::details::relative_details_file(date),
        }
    }

    pub fn date_str(&self) -> String {
        date::format_date_for_log(self.date)
    }

    pub fn open_period(&self) -> Option<&TimePeriod> {
        self.work_periods.last().filter(|p| p.is_open())
    }

    pub fn total_minutes(&self) -> i64 {
        self.work_periods.iter().map(|p| p.duration_min).sum()
    }
}

/// On-disk shape of the whole collection.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildLogs {
    #[serde(default)]
    pub log_entry: Vec<BuildLogEntry>,
}
