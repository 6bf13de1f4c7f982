//! Report rendering: a user template applied to each entry, followed by the
//! entry's detail notes.
//!
//! Templates are plain text with `{{ name }}` placeholders; see [`FIELDS`].

use crate::core::details;
use crate::errors::{AppError, AppResult};
use crate::models::BuildLogEntry;
use crate::utils::date::{format_date_for_log, human_date};
use crate::utils::formatting::mins2readable;
use regex::{Captures, Regex};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

/// Placeholder names a template may use.
pub const FIELDS: &[&str] = &[
    "assembly",
    "date",
    "human_date",
    "title",
    "tags",
    "details_file",
    "work_periods",
    "total_minutes",
    "total_time",
];

const NO_DETAILS: &str = "No details";

fn placeholder() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_]+)\s*\}\}").expect("placeholder pattern is valid")
    })
}

fn field_value(entry: &BuildLogEntry, name: &str) -> String {
    match name {
        "assembly" => entry.assembly.to_string(),
        "date" => format_date_for_log(entry.date),
        "human_date" => human_date(entry.date),
        "title" => entry.title.clone().unwrap_or_default(),
        "tags" => entry.tags.join(", "),
        "details_file" => entry.details_file.clone(),
        "work_periods" => entry
            .work_periods
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        "total_minutes" => entry.total_minutes().to_string(),
        "total_time" => mins2readable(entry.total_minutes()),
        _ => String::new(),
    }
}

#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    /// Checks every placeholder up front so a bad template fails before any
    /// output is produced.
    pub fn parse(text: impl Into<String>) -> AppResult<Self> {
        let text = text.into();
        if let Some(unknown) = placeholder()
            .captures_iter(&text)
            .map(|c| c[1].to_string())
            .find(|name| !FIELDS.contains(&name.as_str()))
        {
            return Err(AppError::Template(format!(
                "unknown field '{unknown}', available: {}",
                FIELDS.join(", ")
            )));
        }
        Ok(Self { text })
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::Template(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse(text)
    }

    pub fn render(&self, entry: &BuildLogEntry) -> String {
        placeholder()
            .replace_all(&self.text, |caps: &Captures| field_value(entry, &caps[1]))
            .into_owned()
    }
}

/// Write every entry, in stored order, followed by its detail text.
pub fn render_log<W: Write>(
    out: &mut W,
    template: &Template,
    entries: &[BuildLogEntry],
    logs_dir: &Path,
) -> AppResult<()> {
    for entry in entries {
        out.write_all(template.render(entry).as_bytes())?;
        let details = details::read_details(logs_dir, entry.date)?;
        writeln!(out, "{}", details.as_deref().unwrap_or(NO_DETAILS))?;
    }
    Ok(())
}
