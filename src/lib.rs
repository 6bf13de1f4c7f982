//! ccub library root.
//! Build journal: work sessions per assembly and date, persisted to a single
//! log file, with free-text detail notes per day.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use cli::Context;
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; filter from `CCUB_LOG`, default `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("CCUB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Dispatch `argv` (without the program name) to the matching command.
pub fn run_with(argv: &[String]) -> AppResult<()> {
    let (name, rest) = match argv.split_first() {
        Some((name, rest)) => (name.to_lowercase(), rest),
        None => (String::new(), argv),
    };

    let ctx = Context::new(Config::load()?);
    tracing::debug!(command = %name, logs = %ctx.cfg.logs_path().display(), "dispatching");
    cli::registry().exec(&name, rest, &ctx)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    run_with(&argv)
}
