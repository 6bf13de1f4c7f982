//! Unified application error type.
//! Parser, update engine, store and commands all return AppError so the
//! top-level dispatcher has a single thing to print.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Log file format error: {0}")]
    Format(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Bad date {input}, valid forms are:\n  {forms}")]
    InvalidDate { input: String, forms: String },

    #[error("{0}")]
    InvalidTime(String),

    #[error("Assembly must be one of:\n  {0}")]
    InvalidAssembly(String),

    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // Conflicts with stored state
    // ---------------------------
    #[error("Log entry already exists for {0}")]
    EntryExists(String),

    #[error(
        "Work period already ongoing, started at {start} ({minutes} min ago). Run 'stop' to end this work period."
    )]
    AlreadyStarted { start: String, minutes: i64 },

    #[error("Work period already stopped at {end}, run 'start' to begin working again")]
    AlreadyStopped { end: String },

    #[error("No log entry exists for {0}")]
    NoEntry(String),

    #[error(
        "Work period started at {start} on {date} was never stopped. Close it with 'log --overwrite' before starting a new one."
    )]
    OpenElsewhere { date: String, start: String },

    #[error("Assembly not specified but also no previous log entry exists from which to inherit")]
    NoAssemblyToInherit,

    // ---------------------------
    // Corrupted state
    // ---------------------------
    #[error("{0}")]
    Consistency(String),

    // ---------------------------
    // Environment
    // ---------------------------
    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Usage(String),

    #[error("Unrecognized command \"{0}\", try \"help\"")]
    UnknownCommand(String),
}

/// Coarse classification used by callers that only care about the kind of
/// failure, not its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    Conflict,
    Consistency,
    Parse,
    Environment,
}

impl AppError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AppError::InvalidDate { .. } | AppError::InvalidTime(_) => ErrorClass::Parse,
            AppError::InvalidAssembly(_)
            | AppError::Validation(_)
            | AppError::NoAssemblyToInherit => ErrorClass::Validation,
            AppError::EntryExists(_)
            | AppError::AlreadyStarted { .. }
            | AppError::AlreadyStopped { .. }
            | AppError::NoEntry(_)
            | AppError::OpenElsewhere { .. } => ErrorClass::Conflict,
            AppError::Consistency(_) => ErrorClass::Consistency,
            AppError::Io(_)
            | AppError::Format(_)
            | AppError::Editor(_)
            | AppError::Template(_)
            | AppError::Config(_)
            | AppError::Usage(_)
            | AppError::UnknownCommand(_) => ErrorClass::Environment,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
