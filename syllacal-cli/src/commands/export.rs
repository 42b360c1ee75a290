use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use owo_colors::OwoColorize;
use syllacal_core::{extract_events, generate_ics};

use crate::input::read_syllabus;
use crate::render;

pub fn run(file: &Path, year: Option<i32>, output: &Path) -> Result<()> {
    let text = read_syllabus(file)?;
    let default_year = year.unwrap_or_else(|| Local::now().year());
    let events = extract_events(&text, default_year);

    if events.is_empty() {
        println!(
            "{}",
            "No dates found in syllabus; nothing to export.".dimmed()
        );
        return Ok(());
    }

    let ics = generate_ics(&events)?;
    fs::write(output, ics).with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Wrote {} {} to {}",
        events.len(),
        render::pluralize("event", events.len()),
        output.display()
    );

    Ok(())
}
