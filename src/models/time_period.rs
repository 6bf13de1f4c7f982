use serde::{Deserialize, Serialize};
use std::fmt;

/// One contiguous span of work within a day.
///
/// Times are kitchen strings (`3:15PM`). A period without `end_time` is
/// open: work started and has not been stopped yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub duration_min: i64,
}

impl TimePeriod {
    pub fn open(start_time: String) -> Self {
        Self {
            start_time,
            end_time: None,
            duration_min: 0,
        }
    }

    pub fn closed(start_time: String, end_time: String, duration_min: i64) -> Self {
        Self {
            start_time,
            end_time: Some(end_time),
            duration_min,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.as_deref().is_none_or(str::is_empty)
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end_time.as_deref() {
            Some(end) if !end.is_empty() => {
                write!(f, "{}-{} ({} min)", self.start_time, end, self.duration_min)
            }
            _ => write!(f, "{}-(ongoing)", self.start_time),
        }
    }
}
