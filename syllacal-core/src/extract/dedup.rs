//! Near-duplicate collapsing and chronological ordering.

use std::collections::HashSet;

use crate::constants::DEDUP_TITLE_PREFIX_LEN;
use crate::event::CalendarEvent;

/// Collapse near-duplicate events and order the survivors by date.
///
/// The key is the event day plus a prefix of the title with casing and
/// punctuation stripped, so the same date mentioned twice with minor
/// formatting differences yields one event. First seen wins. The sort is
/// stable: ties keep their discovery order.
pub(super) fn dedupe_and_sort(events: Vec<CalendarEvent>) -> Vec<CalendarEvent> {
    let mut seen = HashSet::new();
    let mut unique: Vec<CalendarEvent> = events
        .into_iter()
        .filter(|event| seen.insert(dedup_key(event)))
        .collect();

    unique.sort_by_key(|event| event.date);
    unique
}

fn dedup_key(event: &CalendarEvent) -> String {
    let title: String = event
        .title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .take(DEDUP_TITLE_PREFIX_LEN)
        .collect();

    format!("{}-{}", event.date, title)
}
