use crate::cli::Context;
use crate::cli::registry::version_line;
use crate::errors::AppResult;
use clap::Parser;

/// Report the version
#[derive(Parser, Debug)]
pub struct VersionArgs {}

pub fn handle(_args: VersionArgs, _ctx: &Context) -> AppResult<()> {
    println!("{}", version_line());
    Ok(())
}
