use crate::cli::Context;
use crate::core::render::{Template, render_log};
use crate::errors::AppResult;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

/// Render build logs using a user-specified template
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template text file
    #[arg(long = "tmpl", value_name = "FILE")]
    pub tmpl: PathBuf,
}

pub fn handle(args: RenderArgs, ctx: &Context) -> AppResult<()> {
    let template = Template::load(&args.tmpl)?;
    let entries = ctx.store().load()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_log(&mut out, &template, &entries, &ctx.logs_dir())?;
    out.flush()?;
    Ok(())
}
