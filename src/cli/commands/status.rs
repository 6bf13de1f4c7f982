use crate::cli::Context;
use crate::core::status::{DayStatus, day_status};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{human_date, parse_date_arg};
use crate::utils::formatting::{minutes_summary, plural};
use chrono::Local;
use clap::Parser;

/// Show the work logged on a day
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Date of work (today, yesterday, 2006-Jan-02, 2006-1-2, Jan-2, 1-2, 1/2)
    #[arg(long, default_value = "today")]
    pub date: String,
}

pub fn handle(args: StatusArgs, ctx: &Context) -> AppResult<()> {
    let date = parse_date_arg(&args.date)?;
    let entries = ctx.store().load()?;
    let day = human_date(date);

    match day_status(&entries, date, Local::now().naive_local())? {
        DayStatus::NotLogged => warning(format!("Nothing logged on {day}")),
        DayStatus::Open {
            start,
            elapsed_minutes,
            logged_minutes,
        } => {
            match elapsed_minutes {
                Some(min) => info(format!(
                    "Work period in progress on {day}, started at {start} ({min} min ago)"
                )),
                None => warning(format!(
                    "Work period started at {start} on {day} was never stopped"
                )),
            }
            info(format!("Already logged: {}", minutes_summary(logged_minutes)));
        }
        DayStatus::Closed {
            total_minutes,
            periods,
        } => success(format!(
            "Logged {} across {} on {day}",
            minutes_summary(total_minutes),
            plural(periods, "work period")
        )),
    }
    Ok(())
}
