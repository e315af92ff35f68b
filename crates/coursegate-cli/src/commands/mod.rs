//! Command handlers
//!
//! Handlers return the text to print so they can be tested without a
//! terminal.

pub mod catalog;
pub mod check;
pub mod flags;

use crate::cli::Commands;
use crate::context::CliContext;

/// Run a parsed command.
pub fn run(ctx: &CliContext, command: &Commands) -> anyhow::Result<String> {
    match command {
        Commands::Check {
            course,
            lesson,
            prior,
            json,
        } => check::check(ctx, course, *lesson, *prior, *json),
        Commands::Resolve { course } => check::resolve(ctx, course),
        Commands::Catalog { section } => catalog::list(ctx, section.as_deref()),
        Commands::Overview { section } => catalog::overview(ctx, section),
        Commands::Flags { command } => flags::handle_flags_command(ctx, command),
    }
}
