//! CLI for inspecting gate decisions and editing local flags

use clap::Parser;
use coursegate_cli::{commands, init_tracing, Cli, CliConfig, CliContext};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::discover(cli.config.as_deref())?;
    init_tracing(&config, cli.verbose);

    let ctx = CliContext::from_config(config, cli.as_role)?;
    let output = commands::run(&ctx, &cli.command)?;
    print!("{output}");

    Ok(())
}
