use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, Local};
use owo_colors::OwoColorize;
use syllacal_core::extract_events;

use crate::input::read_syllabus;
use crate::render;

pub fn run(file: &Path, year: Option<i32>, json: bool) -> Result<()> {
    let text = read_syllabus(file)?;
    let default_year = year.unwrap_or_else(|| Local::now().year());
    let events = extract_events(&text, default_year);

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!(
            "{}",
            "No dates found in syllabus. The document may not contain recognizable date formats."
                .dimmed()
        );
        return Ok(());
    }

    let heading = format!(
        "Found {} {}",
        events.len(),
        render::pluralize("event", events.len())
    );
    println!("{}", heading.bold());
    println!();

    let today = Local::now().date_naive();
    print!("{}", render::render_event_list(&events, today));

    Ok(())
}
