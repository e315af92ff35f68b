//! Coursegate CLI Library
//!
//! Argument parsing, configuration and command handlers for the
//! `coursegate` binary. Handlers return rendered text so they can be driven
//! from tests.

/// Command-line arguments
pub mod cli;

/// Command handlers for CLI operations
pub mod commands;

/// Configuration management for the CLI
pub mod config;

/// Catalog-bound evaluator and flag repository
pub mod context;

pub use cli::{Cli, Commands};
pub use config::CliConfig;
pub use context::CliContext;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &CliConfig, verbose: bool) {
    let default_level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
