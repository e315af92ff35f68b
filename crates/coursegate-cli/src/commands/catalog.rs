// Catalog listing commands

use crate::context::CliContext;
use anyhow::Result;
use coursegate_catalog::CatalogEntry;
use coursegate_core::SectionId;
use std::fmt::Write;

fn parse_section(raw: &str) -> Result<SectionId> {
    raw.parse()
        .map_err(|e| anyhow::anyhow!("{e}; expected s1, s2 or s3"))
}

fn render_entry(out: &mut String, entry: &CatalogEntry) -> std::fmt::Result {
    let position = entry
        .course_index
        .map(|index| format!(" #{index}"))
        .unwrap_or_default();
    write!(out, "  {}{}  {}", entry.section, position, entry.id)?;
    if !entry.aliases.is_empty() {
        write!(out, " (aka {})", entry.aliases.join(", "))?;
    }
    writeln!(out, " - {}", entry.title)
}

/// List catalog courses, optionally for one section.
pub fn list(ctx: &CliContext, section: Option<&str>) -> Result<String> {
    let catalog = ctx.evaluator.catalog();
    let mut out = String::new();
    writeln!(out, "Courses:")?;
    match section {
        Some(raw) => {
            let section = parse_section(raw)?;
            for entry in catalog.section(&section) {
                render_entry(&mut out, entry)?;
            }
        }
        None => {
            for entry in catalog.entries() {
                render_entry(&mut out, entry)?;
            }
        }
    }
    Ok(out)
}

/// Show the gate of every course in a section for the current flags.
pub fn overview(ctx: &CliContext, section: &str) -> Result<String> {
    let section = parse_section(section)?;
    let flags = ctx.flags.load()?;
    let mut out = String::new();
    writeln!(out, "Section {section} as {}:", flags.role)?;
    for (entry, gate) in ctx.evaluator.section_overview(&flags, &section) {
        writeln!(out, "  {:<16} {}", gate.decision.as_str(), entry.id)?;
    }
    Ok(out)
}
