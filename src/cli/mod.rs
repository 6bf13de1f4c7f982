//! Command layer: argument parsing and handlers, dispatched through an
//! explicit [`Registry`](registry::Registry) built once per process.

pub mod args;
pub mod commands;
pub mod registry;

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::utils::editor::Editor;
use std::path::PathBuf;

pub use registry::{Command, Registry};

/// Everything a command handler needs from its environment.
pub struct Context {
    pub cfg: Config,
}

impl Context {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.cfg.logs_dir()
    }

    pub fn store(&self) -> LogStore {
        LogStore::new(self.cfg.logs_path())
    }

    pub fn editor(&self) -> AppResult<Editor> {
        Editor::resolve(self.cfg.editor.as_deref())
    }
}

/// The registry with every command this binary ships.
pub fn registry() -> Registry {
    use commands::{edit, log, render, start, status, stop, version};

    Registry::new()
        .register("log", "Log a complete build entry", log::handle)
        .register("start", "Start a work period now", start::handle)
        .register("stop", "Stop the ongoing work period", stop::handle)
        .register("edit", "Edit the details file of a logged day", edit::handle)
        .register("status", "Show the work logged on a day", status::handle)
        .register("render", "Render build logs using a user-specified template", render::handle)
        .register("version", "Report the version", version::handle)
}
