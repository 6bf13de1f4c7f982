use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the log file and the per-month detail folders.
    /// Relative paths are resolved against the working directory.
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,
    #[serde(default = "default_logs_file")]
    pub logs_file: String,
    /// Overrides `$EDITOR` when set.
    #[serde(default)]
    pub editor: Option<String>,
    /// Initial content of newly created detail files.
    #[serde(default)]
    pub details_template: String,
}

fn default_logs_dir() -> String {
    "log".to_string()
}
fn default_logs_file() -> String {
    "buildlog.yaml".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logs_dir: default_logs_dir(),
            logs_file: default_logs_file(),
            editor: None,
            details_template: String::new(),
        }
    }
}

impl Config {
    /// `~/.ccub`, falling back to the working directory when HOME is unknown.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ccub")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ccub.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// `logs_dir` with a leading `~/` expanded.
    pub fn logs_dir(&self) -> PathBuf {
        match (self.logs_dir.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.logs_dir),
        }
    }

    pub fn logs_path(&self) -> PathBuf {
        self.logs_dir().join(&self.logs_file)
    }
}
