use crate::cli::Context;
use crate::cli::args::{parse_assembly, parse_tags, parse_title};
use crate::core::details::create_details_file;
use crate::core::update::{Insert, InsertOutcome};
use crate::errors::AppResult;
use crate::models::BuildLogEntry;
use crate::ui::messages::{field, success};
use crate::utils::date::{human_date, parse_date_arg};
use crate::utils::time::parse_work_periods_arg;
use clap::Parser;
use tracing::info;

/// Log a complete build entry for one day
#[derive(Parser, Debug)]
pub struct LogArgs {
    /// Top-level assembly, e.g. "left wing"
    #[arg(long)]
    pub assembly: String,

    /// Date of work (today, yesterday, 2006-Jan-02, 2006-1-2, Jan-2, 1-2, 1/2)
    #[arg(long)]
    pub date: String,

    /// Time period(s) of work, e.g. 9am-11:30am,1pm-3:15pm
    #[arg(long = "time")]
    pub time: String,

    /// Single-line title for the entry
    #[arg(long)]
    pub title: Option<String>,

    /// Comma-separated list of arbitrary tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Replace an existing entry on the same date
    #[arg(long)]
    pub overwrite: bool,
}

impl LogArgs {
    /// Turn raw flags into the entry to insert; no I/O happens here.
    pub fn to_entry(&self) -> AppResult<BuildLogEntry> {
        let assembly = parse_assembly(&self.assembly)?;
        let date = parse_date_arg(&self.date)?;
        let periods = parse_work_periods_arg(date, &self.time)?;

        let mut entry = BuildLogEntry::new(assembly, date, periods);
        entry.title = parse_title(self.title.as_deref())?;
        entry.tags = parse_tags(self.tags.as_deref())?;
        Ok(entry)
    }
}

pub fn handle(args: LogArgs, ctx: &Context) -> AppResult<()> {
    let entry = args.to_entry()?;
    let editor = ctx.editor()?;
    let date = entry.date;

    let store = ctx.store();
    let outcome = store.update(Insert {
        entry,
        overwrite: args.overwrite,
    })?;
    info!(?outcome, "logged entry");

    match outcome {
        InsertOutcome::Appended => success(format!("Logged {}", human_date(date))),
        InsertOutcome::Replaced => success(format!("Replaced entry for {}", human_date(date))),
    }
    field("Log file", store.path().display());

    let (details, _) = create_details_file(
        &ctx.logs_dir(),
        date,
        &ctx.cfg.details_template,
        false,
    )?;
    field("Details file", details.display());
    editor.open(&details)
}
