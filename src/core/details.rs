//! Per-day detail notes: `<logs_dir>/<YYYY-Mon>/<YYYY-Mon-DD>.md`.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{format_date_for_log, format_month_for_log};
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn details_dir(base: &Path, date: NaiveDate) -> PathBuf {
    base.join(format_month_for_log(date))
}

pub fn details_file(base: &Path, date: NaiveDate) -> PathBuf {
    details_dir(base, date).join(format!("{}.md", format_date_for_log(date)))
}

/// Path stored in an entry, relative to the logs directory.
pub fn relative_details_file(date: NaiveDate) -> String {
    format!(
        "{}/{}.md",
        format_month_for_log(date),
        format_date_for_log(date)
    )
}

/// Create `dir` (and parents) unless it already is a directory.
pub fn ensure_dir_exists(dir: &Path) -> AppResult<()> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(AppError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists but is not a directory", dir.display()),
        ))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(fs::create_dir_all(dir)?),
        Err(e) => Err(e.into()),
    }
}

/// Make sure the detail file for `date` exists.
///
/// An existing file is left alone unless `overwrite` is set, in which case
/// it is reset to `template`. Returns the path and whether it was written.
pub fn create_details_file(
    base: &Path,
    date: NaiveDate,
    template: &str,
    overwrite: bool,
) -> AppResult<(PathBuf, bool)> {
    ensure_dir_exists(&details_dir(base, date))?;

    let file = details_file(base, date);
    if file.exists() && !overwrite {
        debug!(path = %file.display(), "details file already present");
        return Ok((file, false));
    }

    fs::write(&file, template)?;
    debug!(path = %file.display(), "details file written");
    Ok((file, true))
}

/// Detail text for `date`, or `None` when no file was ever created.
pub fn read_details(base: &Path, date: NaiveDate) -> AppResult<Option<String>> {
    match fs::read_to_string(details_file(base, date)) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
