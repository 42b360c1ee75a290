//! Event title extraction.
//!
//! Titles come from the line that contained the date, with the date text
//! and known low-information markers stripped out. Lines that end up too
//! sparse borrow their title from qualifying neighboring lines instead.

use std::sync::LazyLock;

use regex::Regex;

use super::dates::contains_date;
use crate::constants::{CONTEXT_MIN_LINE_LEN, CONTEXT_TITLE_MAX_LEN, SHORT_TITLE_LEN};

/// Low-information lead-ins stripped from the front of a title.
static PREFIX_STRIPS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)^week\s+\d+:?\s*").unwrap(),
        Regex::new(r"(?i)^class\s+\d+:?\s*").unwrap(),
        Regex::new(r"(?i)^session\s+\d+:?\s*").unwrap(),
        Regex::new(r"(?i)^lab\s+#?\d+\s*[-–—]?\s*").unwrap(),
        // List numbering: "1. "
        Regex::new(r"^\d+\.\s*").unwrap(),
        Regex::new(r"^[-–—]+\s*").unwrap(),
        // Weekday names: "Monday, "
        Regex::new(r"(?i)^\w+day,?\s*").unwrap(),
        Regex::new(r"(?i)^(?:due|submit|turn\s+in):?\s*").unwrap(),
    ]
});

static TRAILING_DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*[-–—]+\s*$").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Titles that carry no event-specific information.
static GENERIC_TITLES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)^(?:week|class|session|lab|lecture)\s*\d*$").unwrap(),
        Regex::new(r"(?i)^(?:due|submit|assignment)$").unwrap(),
        Regex::new(r"^\d+$").unwrap(),
        Regex::new(r"(?i)^[a-z]\s*$").unwrap(),
    ]
});

/// Derive a display title from the line that produced a date match.
pub(super) fn extract_title(
    line: &str,
    date_text: &str,
    lines: &[String],
    index: usize,
) -> String {
    // Remove the matched date wherever it appears, case-insensitively
    let date_pattern = Regex::new(&format!("(?i){}", regex::escape(date_text))).unwrap();
    let mut title = date_pattern.replace_all(line, "").trim().to_string();

    for prefix in PREFIX_STRIPS.iter() {
        title = prefix.replace(&title, "").trim().to_string();
    }
    title = TRAILING_DASHES.replace(&title, "").trim().to_string();

    // Too sparse after cleanup: borrow from the surrounding lines
    if title.len() < SHORT_TITLE_LEN {
        let context = context_title(line, lines, index);
        if context.len() > title.len() {
            title = context;
        }
    }

    WHITESPACE_RUN.replace_all(&title, " ").trim().to_string()
}

/// Join the qualifying neighbors of `index` into a fallback title.
///
/// The line itself, short lines, and lines carrying their own date tokens
/// are excluded; they would title some other event.
fn context_title(line: &str, lines: &[String], index: usize) -> String {
    let start = index.saturating_sub(1);
    let end = (index + 2).min(lines.len());

    let context = lines[start..end]
        .iter()
        .filter(|l| l.as_str() != line && l.len() > CONTEXT_MIN_LINE_LEN && !contains_date(l))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    context
        .chars()
        .take(CONTEXT_TITLE_MAX_LEN)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Is this title just a structural/category word?
pub(super) fn is_generic_title(title: &str) -> bool {
    let trimmed = title.trim();
    GENERIC_TITLES.iter().any(|pattern| pattern.is_match(trimmed))
}
