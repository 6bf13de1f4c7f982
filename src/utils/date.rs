//! Date utilities: loose date arguments, canonical log layouts.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};

/// Month bucket layout, e.g. `2022-Feb`.
pub const MONTH_LAYOUT: &str = "%Y-%b";
/// Canonical entry date layout, e.g. `2022-Feb-08`.
pub const DATE_LAYOUT: &str = "%Y-%b-%d";
/// Layout used in user-facing messages, e.g. `Tue Feb 08, 2022`.
pub const HUMAN_LAYOUT: &str = "%a %b %d, %Y";

/// How a layout obtains its year.
#[derive(Clone, Copy)]
enum Year {
    /// The input carries a 4-digit year.
    Explicit,
    /// The input has no year; the current one is assumed.
    Current,
}

struct DateForm {
    /// Shown in help text and errors.
    example: &'static str,
    /// chrono layout applied to the (possibly year-prefixed) input.
    layout: &'static str,
    year: Year,
}

/// Accepted layouts in priority order: first successful parse wins.
const DATE_FORMS: &[DateForm] = &[
    DateForm {
        example: "2006-Jan-02",
        layout: "%Y-%b-%d",
        year: Year::Explicit,
    },
    DateForm {
        example: "2006-1-2",
        layout: "%Y-%m-%d",
        year: Year::Explicit,
    },
    DateForm {
        example: "Jan-2",
        layout: "%Y-%b-%d",
        year: Year::Current,
    },
    DateForm {
        example: "1-2",
        layout: "%Y-%m-%d",
        year: Year::Current,
    },
    DateForm {
        example: "1/2",
        layout: "%Y/%m/%d",
        year: Year::Current,
    },
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Every accepted date form, keywords first.
pub fn valid_date_formats() -> Vec<&'static str> {
    let mut forms = vec!["today", "yesterday"];
    forms.extend(DATE_FORMS.iter().map(|f| f.example));
    forms
}

/// True when `input` is a non-empty, case-insensitive prefix of `keyword`.
fn is_keyword_prefix(input: &str, keyword: &str) -> bool {
    !input.is_empty()
        && input.len() <= keyword.len()
        && keyword[..input.len()].eq_ignore_ascii_case(input)
}

/// Rejects short years such as `22-2-8`, which chrono would read as year 22.
fn has_full_year(input: &str) -> bool {
    let year = input.split('-').next().unwrap_or_default();
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

fn parse_form(form: &DateForm, input: &str, current_year: i32) -> Option<NaiveDate> {
    match form.year {
        Year::Explicit => {
            if !has_full_year(input) {
                return None;
            }
            NaiveDate::parse_from_str(input, form.layout).ok()
        }
        Year::Current => {
            let sep = &form.layout[2..3];
            let dated = format!("{current_year}{sep}{input}");
            NaiveDate::parse_from_str(&dated, form.layout).ok()
        }
    }
}

/// Parse a loose date argument relative to `today`.
///
/// Accepts any prefix of `today` / `yesterday` (so `t` and `y` work), then
/// tries each layout of [`valid_date_formats`] in order.
pub fn parse_date_arg_from(input: &str, today: NaiveDate) -> AppResult<NaiveDate> {
    let trimmed = input.trim();

    if is_keyword_prefix(trimmed, "today") {
        return Ok(today);
    }
    if is_keyword_prefix(trimmed, "yesterday") {
        return today
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| invalid_date(input));
    }

    DATE_FORMS
        .iter()
        .find_map(|form| parse_form(form, trimmed, today.year()))
        .ok_or_else(|| invalid_date(input))
}

/// [`parse_date_arg_from`] against the local system date.
pub fn parse_date_arg(input: &str) -> AppResult<NaiveDate> {
    parse_date_arg_from(input, today())
}

fn invalid_date(input: &str) -> AppError {
    AppError::InvalidDate {
        input: input.to_string(),
        forms: valid_date_formats().join("\n  "),
    }
}

pub fn format_date_for_log(date: NaiveDate) -> String {
    date.format(DATE_LAYOUT).to_string()
}

pub fn format_month_for_log(date: NaiveDate) -> String {
    date.format(MONTH_LAYOUT).to_string()
}

pub fn human_date(date: NaiveDate) -> String {
    date.format(HUMAN_LAYOUT).to_string()
}

/// Inverse of [`format_date_for_log`].
pub fn parse_log_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_LAYOUT).ok()
}

/// serde adapter storing a `NaiveDate` in the canonical log layout.
pub mod log_layout {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_date_for_log(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_log_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid log date '{raw}'")))
    }
}
