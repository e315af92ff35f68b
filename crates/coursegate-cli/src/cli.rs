//! Command-line arguments

use crate::commands::flags::FlagsSubcommand;
use clap::{Parser, Subcommand};
use coursegate_core::{CoreError, Role};
use std::path::PathBuf;

/// Strict role parser: unknown roles are rejected on the command line.
fn parse_role(raw: &str) -> Result<Role, CoreError> {
    raw.parse()
}

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "coursegate")]
#[command(about = "Coursegate - inspect course access decisions and local user flags", long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (default: ./coursegate.toml, then ~/.coursegate/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Evaluate as this role without changing stored flags
    #[arg(long, global = true, value_parser = parse_role)]
    pub as_role: Option<Role>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the gate for a course, or for one of its lessons
    Check {
        /// Course id or alias
        course: String,

        /// 1-based lesson index
        #[arg(short, long)]
        lesson: Option<u32>,

        /// Lessons already completed in this course
        #[arg(short, long, default_value = "0")]
        prior: u32,

        /// Print the gate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a course id or alias to its locator
    Resolve {
        /// Course id or alias
        course: String,
    },

    /// List catalog courses
    Catalog {
        /// Only list one section (s1, s2, s3)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Show the gate of every course in a section
    Overview {
        /// Section code (s1, s2, s3)
        section: String,
    },

    /// Inspect or edit stored flags
    Flags {
        /// Flags operation
        #[command(subcommand)]
        command: FlagsSubcommand,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lesson_check() {
        let cli = Cli::try_parse_from([
            "coursegate",
            "check",
            "blueprint",
            "--lesson",
            "2",
            "--prior",
            "1",
            "--as-role",
            "trial",
        ])
        .unwrap();
        assert_eq!(cli.as_role, Some(Role::Trial));
        match cli.command {
            Commands::Check {
                course,
                lesson,
                prior,
                json,
            } => {
                assert_eq!(course, "blueprint");
                assert_eq!(lesson, Some(2));
                assert_eq!(prior, 1);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn as_role_is_strict() {
        assert!(Cli::try_parse_from(["coursegate", "catalog", "--as-role", "root"]).is_err());
    }
}
