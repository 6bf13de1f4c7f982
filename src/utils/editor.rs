//! External editor launching for detail notes.

use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Editor {
    program: String,
    args: Vec<String>,
}

impl Editor {
    /// Configured editor first, then `$EDITOR`. A value such as `code -w`
    /// is split into program and arguments.
    pub fn resolve(configured: Option<&str>) -> AppResult<Self> {
        let raw = configured
            .map(str::to_string)
            .or_else(|| std::env::var("EDITOR").ok())
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::Editor("Environment variable EDITOR is not set".into()))?;

        let mut parts = raw.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| AppError::Editor("Environment variable EDITOR is not set".into()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Blocks until the editor exits; it inherits the terminal.
    pub fn open(&self, file: &Path) -> AppResult<()> {
        debug!(editor = %self.program, file = %file.display(), "launching editor");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(file)
            .status()
            .map_err(|e| AppError::Editor(format!("failed to launch '{}': {e}", self.program)))?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::Editor(format!(
                "'{}' exited with {status}",
                self.program
            )))
        }
    }
}
