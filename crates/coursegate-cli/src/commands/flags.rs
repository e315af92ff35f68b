// Flag management commands

use crate::context::CliContext;
use anyhow::{bail, Result};
use coursegate_core::{CoreError, Role, SectionId, UserFlags};
use coursegate_flags::{update, FlagsMutation};
use std::fmt::Write;

fn strict_role(raw: &str) -> std::result::Result<Role, CoreError> {
    raw.parse()
}

/// `coursegate flags` subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum FlagsSubcommand {
    /// Print the stored flags
    Show,
    /// Change the stored role
    SetRole {
        /// free, trial, monthly, annual, downsell or admin
        #[arg(value_parser = strict_role)]
        role: Role,
    },
    /// Record that the user pressed "Not Ready Yet"
    NotReady,
    /// Record that the blueprint course is complete
    CompleteBlueprint,
    /// Record a masterclass purchase
    Purchase {
        /// Masterclass id or alias
        course: String,
    },
    /// Clear progression and purchases, keeping the role
    Reset,
}

/// Run a flags subcommand and render the resulting flags.
pub fn handle_flags_command(ctx: &CliContext, subcommand: &FlagsSubcommand) -> Result<String> {
    let mutation = match subcommand {
        FlagsSubcommand::Show => return render_flags(&ctx.flags.load()?),
        FlagsSubcommand::SetRole { role } => {
            if let Some(active) = ctx.role_override {
                bail!(
                    "Role override {active} is active; drop --as-role or role_override \
                     to change the stored role"
                );
            }
            FlagsMutation::SetRole { role: *role }
        }
        FlagsSubcommand::NotReady => FlagsMutation::PressNotReady,
        FlagsSubcommand::CompleteBlueprint => FlagsMutation::CompleteBlueprint,
        FlagsSubcommand::Purchase { course } => purchase_mutation(ctx, course)?,
        FlagsSubcommand::Reset => FlagsMutation::Reset,
    };

    let flags = update(&*ctx.flags, &mutation)?;
    tracing::info!(
        flags_file = %ctx.config.flags_file.display(),
        ?mutation,
        "updated flags"
    );
    render_flags(&flags)
}

fn purchase_mutation(ctx: &CliContext, course: &str) -> Result<FlagsMutation> {
    let catalog = ctx.evaluator.catalog();
    let Some(entry) = catalog.entry(course) else {
        bail!("Unknown course: {course}");
    };
    if entry.section != SectionId::Masterclass {
        bail!(
            "{} is in {}; only masterclasses ({}) are sold individually",
            entry.id,
            entry.section,
            SectionId::Masterclass
        );
    }
    Ok(FlagsMutation::RecordPurchase {
        course_id: entry.id.clone(),
    })
}

fn render_flags(flags: &UserFlags) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "role:                    {}", flags.role)?;
    writeln!(out, "pressed_not_ready:       {}", flags.pressed_not_ready)?;
    writeln!(out, "blueprint_done:          {}", flags.blueprint_done)?;
    let purchases: Vec<_> = flags
        .purchased_masterclasses
        .iter()
        .map(|id| id.as_str())
        .collect();
    writeln!(out, "purchased_masterclasses: [{}]", purchases.join(", "))?;
    Ok(out)
}
