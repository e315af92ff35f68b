// Gate inspection commands

use crate::context::CliContext;
use anyhow::Result;
use coursegate_core::{CourseLocator, LessonProgress};
use coursegate_policy::CourseGate;
use std::fmt::Write;

fn describe(locator: &CourseLocator) -> String {
    match locator.course_index {
        Some(index) => format!("{} ({}, course {})", locator.course_id, locator.section, index),
        None => format!("{} ({})", locator.course_id, locator.section),
    }
}

fn render_gate(out: &mut String, gate: &CourseGate) -> std::fmt::Result {
    writeln!(out, "decision: {}", gate.decision)?;
    if !gate.message.is_empty() {
        writeln!(out, "message:  {}", gate.message)?;
    }
    if let Some(cta) = gate.cta {
        writeln!(out, "action:   {}", cta.label)?;
    }
    Ok(())
}

/// Show the gate for a course or one of its lessons.
pub fn check(
    ctx: &CliContext,
    course: &str,
    lesson: Option<u32>,
    prior: u32,
    json: bool,
) -> Result<String> {
    let flags = ctx.flags.load()?;
    let gate = match lesson {
        Some(index) => ctx.evaluator.evaluate_lesson(
            &flags,
            course,
            LessonProgress::new(index, prior),
        ),
        None => ctx.evaluator.evaluate_course(&flags, course),
    };

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&gate)?));
    }

    let mut out = String::new();
    match ctx.evaluator.catalog().resolve(course) {
        Some(locator) => writeln!(out, "course:   {}", describe(&locator))?,
        None => writeln!(out, "course:   {course} (not in catalog)")?,
    }
    if let Some(index) = lesson {
        writeln!(out, "lesson:   {index} ({prior} completed)")?;
    }
    writeln!(out, "role:     {}", flags.role)?;
    render_gate(&mut out, &gate)?;
    Ok(out)
}

/// Resolve a slug to its locator.
pub fn resolve(ctx: &CliContext, course: &str) -> Result<String> {
    match ctx.evaluator.catalog().resolve(course) {
        Some(locator) => Ok(format!("{}\n", describe(&locator))),
        None => Err(anyhow::anyhow!("Unknown course: {course}")),
    }
}
