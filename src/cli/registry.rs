use super::Context;
use crate::errors::{AppError, AppResult};
use clap::Parser;
use clap::error::ErrorKind;
use std::collections::BTreeMap;

pub const CLI_NAME: &str = "ccub";
pub const HELP_COMMAND: &str = "help";

/// Parses its own flags and executes.
pub trait Command {
    fn description(&self) -> &'static str;
    fn run(&self, name: &str, argv: &[String], ctx: &Context) -> AppResult<()>;
}

/// A command whose flags are a clap derive struct.
struct ClapCommand<A> {
    description: &'static str,
    handler: fn(A, &Context) -> AppResult<()>,
}

impl<A: Parser> Command for ClapCommand<A> {
    fn description(&self) -> &'static str {
        self.description
    }

    fn run(&self, name: &str, argv: &[String], ctx: &Context) -> AppResult<()> {
        let bin = format!("{CLI_NAME} {name}");
        let args = match A::try_parse_from(std::iter::once(&bin).chain(argv)) {
            Ok(args) => args,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.print()?;
                return Ok(());
            }
            Err(e) => return Err(AppError::Usage(e.render().to_string())),
        };
        (self.handler)(args, ctx)
    }
}

#[derive(Default)]
pub struct Registry {
    commands: BTreeMap<&'static str, Box<dyn Command>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<A: Parser + 'static>(
        mut self,
        name: &'static str,
        description: &'static str,
        handler: fn(A, &Context) -> AppResult<()>,
    ) -> Self {
        self.commands.insert(
            name,
            Box::new(ClapCommand {
                description,
                handler,
            }),
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(Box::as_ref)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// Run `name`; an empty name or `help` prints usage instead.
    pub fn exec(&self, name: &str, argv: &[String], ctx: &Context) -> AppResult<()> {
        if name.is_empty() || name == HELP_COMMAND {
            return self.help(argv, ctx);
        }
        let cmd = self
            .get(name)
            .ok_or_else(|| AppError::UnknownCommand(name.to_string()))?;
        cmd.run(name, argv, ctx)
    }

    fn help(&self, argv: &[String], ctx: &Context) -> AppResult<()> {
        if let Some(name) = argv.first() {
            let name = name.to_lowercase();
            let cmd = self
                .get(&name)
                .ok_or_else(|| AppError::UnknownCommand(name.clone()))?;
            return cmd.run(&name, &["--help".to_string()], ctx);
        }
        print!("{}", self.usage());
        Ok(())
    }

    pub fn usage(&self) -> String {
        let width = self.names().map(str::len).max().unwrap_or(0);
        let mut out = format!(
            "{}\n\n\
             Usage:  {CLI_NAME} COMMAND [--flag1 value] [--flag2 value] ...\n \
             e.g.,  {CLI_NAME} log --help\n        \
             {CLI_NAME} log --assembly \"left wing\" --date today --time 1pm-3:15pm\n\n\
             Commands:\n",
            version_line()
        );
        for (name, cmd) in &self.commands {
            out.push_str(&format!("  {name:<width$}  {}\n", cmd.description()));
        }
        out
    }
}

pub fn version_line() -> String {
    format!("Carbon Cub Build Log, version {}", env!("CARGO_PKG_VERSION"))
}
