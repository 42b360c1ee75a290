//! Date recognition and normalization.
//!
//! A fixed table of recognizers is run against every line and all matches
//! are collected; a line may legitimately contain several dates. Patterns
//! are ordered by priority and a later pattern never claims text already
//! claimed by an earlier one, so "Jan 15-20" is recognized once as a range
//! rather than again as "Jan 15" plus the numeric "15-20".

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::constants::TWO_DIGIT_YEAR_PIVOT;

/// How a matched substring should be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DateKind {
    /// "January 15, 2024", "Jan 15", "Jan. 15, 2024", and month-name
    /// ranges like "Jan 15-20" (only the start date is scheduled)
    MonthName,
    /// "9/2", "1/15/24", "01/15/2024", "9-2", "1-15-24"
    Numeric,
}

/// A raw substring recognized as a date-like token, not yet validated
/// as a real calendar date.
#[derive(Debug, Clone)]
pub(super) struct DateMatch {
    pub text: String,
    pub kind: DateKind,
}

static MONTH_NAMES: &str = "January|February|March|April|May|June|July|August|September|October|November|December";
static MONTH_ABBREVS: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec";

/// Recognizer table, in priority order.
static DATE_PATTERNS: LazyLock<Vec<(Regex, DateKind)>> = LazyLock::new(|| {
    vec![
        // Ranges sharing one month token: "Jan 15-20", "January 15–20, 2024"
        (
            Regex::new(&format!(
                r"(?i)\b(?:{MONTH_NAMES}|(?:{MONTH_ABBREVS})\.?)\s+\d{{1,2}}\s*[-–—]\s*\d{{1,2}}(?:,?\s*\d{{4}})?\b"
            ))
            .unwrap(),
            DateKind::MonthName,
        ),
        // Full month names: "January 15, 2024", "January 15"
        (
            Regex::new(&format!(r"(?i)\b(?:{MONTH_NAMES})\s+\d{{1,2}}(?:,?\s*\d{{4}})?\b")).unwrap(),
            DateKind::MonthName,
        ),
        // Short month names: "Jan 15", "Jan. 15, 2024", "Sep 30"
        (
            Regex::new(&format!(r"(?i)\b(?:{MONTH_ABBREVS})\.?\s+\d{{1,2}}(?:,?\s*\d{{4}})?\b")).unwrap(),
            DateKind::MonthName,
        ),
        // Numeric with slashes: "9/2", "10/28", "1/15/24", "01/15/2024"
        (
            Regex::new(r"\b\d{1,2}/\d{1,2}(?:/\d{2,4})?\b").unwrap(),
            DateKind::Numeric,
        ),
        // Numeric with dashes: "9-2", "10-28", "1-15-24"
        (
            Regex::new(r"\b\d{1,2}-\d{1,2}(?:-\d{2,4})?\b").unwrap(),
            DateKind::Numeric,
        ),
    ]
});

/// Lightweight date-like check used when filtering title-context lines.
static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:\d{{1,2}}[/-]\d{{1,2}}(?:[/-]\d{{2,4}})?|(?:{MONTH_ABBREVS})\.?\s+\d{{1,2}})\b"
    ))
    .unwrap()
});

/// Captures for normalizing month-name tokens, range tails included.
static MONTH_NAME_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([A-Za-z]+)\.?\s+(\d{1,2})(?:\s*[-–—]\s*\d{1,2})?(?:,?\s*(\d{4}))?$").unwrap()
});

/// Captures for normalizing numeric tokens.
static NUMERIC_PARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})[/-](\d{1,2})(?:[/-](\d{2,4}))?$").unwrap());

/// Scan a line for date-like tokens.
pub(super) fn find_dates(line: &str) -> Vec<DateMatch> {
    let mut matches = Vec::new();
    let mut claimed: Vec<(usize, usize)> = Vec::new();

    for (pattern, kind) in DATE_PATTERNS.iter() {
        for m in pattern.find_iter(line) {
            if claimed.iter().any(|&(s, e)| m.start() < e && s < m.end()) {
                continue;
            }
            claimed.push((m.start(), m.end()));
            matches.push(DateMatch {
                text: m.as_str().to_owned(),
                kind: *kind,
            });
        }
    }

    matches
}

/// Does this line contain anything date-shaped?
pub(super) fn contains_date(line: &str) -> bool {
    DATE_TOKEN.is_match(line)
}

/// Normalize a matched token into an absolute date.
///
/// `default_year` fills in for tokens that omit a year. Returns None when
/// the token does not denote a real calendar date (month 13, Feb 30, ...);
/// callers discard the match silently.
pub(super) fn resolve_date(date_match: &DateMatch, default_year: i32) -> Option<NaiveDate> {
    match date_match.kind {
        DateKind::MonthName => {
            let caps = MONTH_NAME_PARTS.captures(date_match.text.trim())?;
            let month = month_number(caps.get(1)?.as_str())?;
            let day: u32 = caps.get(2)?.as_str().parse().ok()?;
            let year: i32 = match caps.get(3) {
                Some(y) => y.as_str().parse().ok()?,
                None => default_year,
            };
            NaiveDate::from_ymd_opt(year, month, day)
        }
        DateKind::Numeric => {
            let caps = NUMERIC_PARTS.captures(date_match.text.trim())?;
            // US convention: month first, day second
            let month: u32 = caps.get(1)?.as_str().parse().ok()?;
            let day: u32 = caps.get(2)?.as_str().parse().ok()?;
            let year = match caps.get(3) {
                Some(y) => resolve_year(y.as_str().parse().ok()?),
                None => default_year,
            };
            NaiveDate::from_ymd_opt(year, month, day)
        }
    }
}

/// Expand a possibly-two-digit year around the pivot.
fn resolve_year(year: i32) -> i32 {
    if year >= 100 {
        year
    } else if year < TWO_DIGIT_YEAR_PIVOT {
        2000 + year
    } else {
        1900 + year
    }
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.to_ascii_lowercase().as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}
