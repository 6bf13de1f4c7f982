use crate::cli::Context;
use crate::core::details::create_details_file;
use crate::core::update::find_entry;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::field;
use crate::utils::date::{human_date, parse_date_arg};
use clap::Parser;

/// Edit the details file of a logged day
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Date of work (today, yesterday, 2006-Jan-02, 2006-1-2, Jan-2, 1-2, 1/2)
    #[arg(long, default_value = "today")]
    pub date: String,
}

pub fn handle(args: EditArgs, ctx: &Context) -> AppResult<()> {
    let date = parse_date_arg(&args.date)?;
    let editor = ctx.editor()?;

    let entries = ctx.store().load()?;
    if find_entry(&entries, date).is_none() {
        return Err(AppError::NoEntry(format!(
            "{}. Create a log entry using 'log' or 'start'.",
            human_date(date)
        )));
    }

    // The notes file may have been removed by hand since the entry was made.
    let (details, _) = create_details_file(
        &ctx.logs_dir(),
        date,
        &ctx.cfg.details_template,
        false,
    )?;
    field("Editing", human_date(date));
    field("Details file", details.display());
    editor.open(&details)
}
