//! Entry-collection persistence: the whole collection is read from and
//! written back to a single YAML file on every command.

use crate::core::details::ensure_dir_exists;
use crate::core::update::LogUpdate;
use crate::errors::AppResult;
use crate::models::{BuildLogEntry, BuildLogs};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored entries; empty when the file does not exist yet.
    pub fn load(&self) -> AppResult<Vec<BuildLogEntry>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "log file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let logs: BuildLogs = serde_yaml::from_str(&text)?;
        debug!(path = %self.path.display(), count = logs.log_entry.len(), "log loaded");
        Ok(logs.log_entry)
    }

    /// Replace the file with `entries`.
    ///
    /// Written to a sibling temp file and renamed into place, so a failed
    /// write leaves the previous file intact.
    pub fn save(&self, entries: &[BuildLogEntry]) -> AppResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        ensure_dir_exists(&dir)?;

        let logs = BuildLogs {
            log_entry: entries.to_vec(),
        };
        let yaml = serde_yaml::to_string(&logs)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(yaml.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        info!(path = %self.path.display(), count = entries.len(), "log saved");
        Ok(())
    }

    /// Load, apply `update`, store. Nothing is written when the update fails.
    pub fn update<U: LogUpdate>(&self, update: U) -> AppResult<U::Report> {
        let entries = self.load()?;
        let (entries, report) = update.apply(entries)?;
        self.save(&entries)?;
        Ok(report)
    }
}
