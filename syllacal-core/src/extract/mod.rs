//! Syllabus text-to-event extraction pipeline.
//!
//! A single synchronous pass over a block of plain text. Lines are scanned
//! for date-like tokens, each token becomes a candidate event with a title
//! and category, and the surviving candidates are deduplicated and sorted
//! chronologically. Each stage is a pure function; the only context shared
//! across lines is the full line sequence, which the title extractor
//! consults for neighboring-line fallbacks.
//!
//! Every per-candidate failure (unparseable date token, degenerate title)
//! is recovered by skipping the candidate. No single malformed line can
//! abort processing of the rest of the document.

mod classify;
mod dates;
mod dedup;
mod segment;
mod title;

use crate::constants::MIN_TITLE_LEN;
use crate::event::CalendarEvent;

use classify::classify;
use dates::{find_dates, resolve_date};
use dedup::dedupe_and_sort;
use segment::segment_lines;
use title::{extract_title, is_generic_title};

/// Extract calendar events from syllabus text.
///
/// `default_year` is substituted for date tokens that omit a year. Callers
/// pass the current year at parse time; tests pass a fixed year to keep the
/// pipeline fully deterministic.
pub fn extract_events(text: &str, default_year: i32) -> Vec<CalendarEvent> {
    let lines = segment_lines(text);

    let mut events = Vec::new();
    let mut next_id: u32 = 1;

    for (index, line) in lines.iter().enumerate() {
        for date_match in find_dates(line) {
            // Unparseable tokens are dropped silently, never propagated
            let Some(date) = resolve_date(&date_match, default_year) else {
                continue;
            };

            let title = extract_title(line, &date_match.text, &lines, index);
            if title.len() < MIN_TITLE_LEN || is_generic_title(&title) {
                continue;
            }

            let description = (line.len() > title.len()).then(|| line.clone());

            events.push(CalendarEvent {
                id: next_id,
                title,
                date,
                event_type: classify(line),
                description,
                raw_text: line.clone(),
            });
            next_id += 1;
        }
    }

    dedupe_and_sort(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;
    use chrono::NaiveDate;

    const YEAR: i32 = 2025;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const SAMPLE: &str = "\
CS 201: Data Structures - Fall Syllabus
Week 1: Introduction to the course - Sep 2
Week 2: Sorting algorithms lecture Sep 9
Homework 1 due 9/16
Homework 1 due 09/16
Midterm exam October 14
Read chapters on balanced trees, Oct 21
Thanksgiving break - no class Nov 27
Final exam December 16, 2025
";

    #[test]
    fn test_empty_input_yields_no_events() {
        assert!(extract_events("", YEAR).is_empty());
        assert!(extract_events("\n   \n\t\n", YEAR).is_empty());
    }

    #[test]
    fn test_text_without_dates_yields_no_events() {
        let text = "Course policies\nGrading is based on participation\n";
        assert!(extract_events(text, YEAR).is_empty());
    }

    #[test]
    fn test_year_defaulting_on_bare_numeric_dates() {
        let events = extract_events("Assignment due 9/2", YEAR);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, date(2025, 9, 2));
        assert_eq!(events[0].event_type, EventType::Assignment);
    }

    #[test]
    fn test_two_digit_years_resolve_around_the_pivot() {
        let events = extract_events(
            "Final exam scheduled 1/15/24\nHistory seminar begins 1/15/72",
            YEAR,
        );
        assert_eq!(events.len(), 2);
        // Sorted ascending, so 1972 comes first
        assert_eq!(events[0].date, date(1972, 1, 15));
        assert_eq!(events[1].date, date(2024, 1, 15));
    }

    #[test]
    fn test_month_range_collapses_to_start_date() {
        let events = extract_events("Jan 15-20, 2024: Reading week", YEAR);
        assert_eq!(events.len(), 1, "Got: {:?}", events);
        assert_eq!(events[0].date, date(2024, 1, 15));
        assert_eq!(events[0].event_type, EventType::Reading);
    }

    #[test]
    fn test_classification_precedence_exam_beats_class() {
        let events = extract_events("Final exam and class discussion on 12/16", YEAR);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::Exam);
    }

    #[test]
    fn test_duplicate_date_mentions_collapse() {
        let events = extract_events("Homework 1 due 9/16\nHomework 1 due 09/16", YEAR);
        assert_eq!(events.len(), 1, "Got: {:?}", events);
        assert_eq!(events[0].date, date(2025, 9, 16));
    }

    #[test]
    fn test_context_fallback_for_near_empty_titles() {
        let text = "\
Week 5 covers hash tables and collision handling
10/5:
Quiz covering recent material
";
        let events = extract_events(text, YEAR);
        assert_eq!(events.len(), 1, "Got: {:?}", events);
        assert_eq!(events[0].date, date(2025, 10, 5));
        // Title pulled from qualifying neighbors, not the bare "10/5:" line
        assert!(
            events[0].title.contains("hash tables"),
            "Got title: {:?}",
            events[0].title
        );
    }

    #[test]
    fn test_output_is_sorted_ascending_by_date() {
        let events = extract_events(SAMPLE, YEAR);
        assert!(!events.is_empty());
        for pair in events.windows(2) {
            assert!(
                pair[0].date <= pair[1].date,
                "{:?} sorts after {:?}",
                pair[0].date,
                pair[1].date
            );
        }
    }

    #[test]
    fn test_no_two_events_share_a_dedup_key() {
        let events = extract_events(SAMPLE, YEAR);
        let mut keys: Vec<String> = events
            .iter()
            .map(|e| {
                let title: String = e
                    .title
                    .to_lowercase()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .take(20)
                    .collect();
                format!("{}-{}", e.date, title)
            })
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), events.len());
    }

    #[test]
    fn test_no_output_title_is_generic_or_too_short() {
        let text = "\
Week 3 9/15
Lab 2 9/22
Homework 2 due 9/29
";
        let events = extract_events(text, YEAR);
        for event in &events {
            assert!(event.title.len() >= MIN_TITLE_LEN, "Got: {:?}", event.title);
            assert!(
                !is_generic_title(&event.title),
                "Generic title survived: {:?}",
                event.title
            );
        }
    }

    #[test]
    fn test_identical_input_is_deterministic() {
        let first = extract_events(SAMPLE, YEAR);
        let second = extract_events(SAMPLE, YEAR);
        assert_eq!(first, second);
    }

    #[test]
    fn test_raw_text_and_description_reference_the_source_line() {
        let events = extract_events("Project proposal due 10/3", YEAR);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].raw_text, "Project proposal due 10/3");
        // The line says more than the title, so it is kept as description
        assert_eq!(
            events[0].description.as_deref(),
            Some("Project proposal due 10/3")
        );
    }

    #[test]
    fn test_malformed_dates_are_skipped_not_fatal() {
        // "13/45" matches the numeric pattern but is not a real date;
        // the rest of the document must still be processed.
        let text = "Broken row 13/45\nFinal exam 12/16";
        let events = extract_events(text, YEAR);
        assert_eq!(events.len(), 1, "Got: {:?}", events);
        assert_eq!(events[0].date, date(2025, 12, 16));
    }
}
