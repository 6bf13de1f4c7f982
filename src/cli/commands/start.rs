use crate::cli::Context;
use crate::cli::args::parse_assembly;
use crate::core::details::create_details_file;
use crate::core::update::Start;
use crate::errors::AppResult;
use crate::ui::messages::{field, info, success};
use chrono::Local;
use clap::Parser;

/// Start a work period now
#[derive(Parser, Debug)]
pub struct StartArgs {
    /// Top-level assembly; if not set, assumed unchanged from the most recent entry
    #[arg(long)]
    pub assembly: Option<String>,
}

pub fn handle(args: StartArgs, ctx: &Context) -> AppResult<()> {
    let assembly = args.assembly.as_deref().map(parse_assembly).transpose()?;
    let editor = ctx.editor()?;

    let store = ctx.store();
    let report = store.update(Start {
        assembly,
        now: Local::now().naive_local(),
    })?;

    success(format!("Started a new work period at {}", report.start_time));
    if report.created_entry {
        info(format!("New entry for assembly '{}'", report.assembly));
    }
    field("Log file", store.path().display());

    let (details, _) = create_details_file(
        &ctx.logs_dir(),
        report.date,
        &ctx.cfg.details_template,
        false,
    )?;
    field("Details file", details.display());
    editor.open(&details)
}
