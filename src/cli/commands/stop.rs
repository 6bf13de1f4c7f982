use crate::cli::Context;
use crate::core::update::Stop;
use crate::errors::AppResult;
use crate::ui::messages::{field, info, success};
use crate::utils::date::human_date;
use crate::utils::formatting::minutes_summary;
use chrono::Local;
use clap::Parser;

/// Stop the ongoing work period
#[derive(Parser, Debug)]
pub struct StopArgs {}

pub fn handle(_args: StopArgs, ctx: &Context) -> AppResult<()> {
    let store = ctx.store();
    let report = store.update(Stop {
        now: Local::now().naive_local(),
    })?;

    let period = &report.period;
    success(format!(
        "Stopped work period, {} to {} ({} min)",
        period.start_time,
        period.end_time.as_deref().unwrap_or_default(),
        period.duration_min
    ));
    info(format!(
        "Total time worked on {}: {}",
        human_date(report.date),
        minutes_summary(report.total_minutes)
    ));
    field("Log file", store.path().display());
    Ok(())
}
