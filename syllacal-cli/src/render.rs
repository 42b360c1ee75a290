//! Terminal rendering for extracted events.
//!
//! Colored output via owo_colors. `today` is passed in explicitly so the
//! freshness annotations stay testable.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use syllacal_core::{CalendarEvent, EventType};

/// Render the full event list, one block per event.
pub fn render_event_list(events: &[CalendarEvent], today: NaiveDate) -> String {
    events
        .iter()
        .map(|event| render_event(event, today))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One event: icon, title, type label, date, freshness tag.
fn render_event(event: &CalendarEvent, today: NaiveDate) -> String {
    let date_label = event.date.format("%A, %B %-d, %Y").to_string();
    let type_label = format!("[{}]", event.event_type.label());

    let mut out = format!(
        "{} {} {}\n   {}{}\n",
        event.event_type.icon(),
        event.title.bold(),
        type_label.dimmed(),
        date_label,
        freshness_tag(event, today),
    );

    if let Some(desc) = &event.description {
        if desc != &event.title {
            out.push_str(&format!("   {}\n", desc.dimmed()));
        }
    }

    out
}

/// "in N days" for upcoming events, "past due" for overdue assignments.
fn freshness_tag(event: &CalendarEvent, today: NaiveDate) -> String {
    let days = (event.date - today).num_days();

    if days > 0 {
        let label = format!("in {} {}", days, pluralize("day", days as usize));
        format!("  {}", label.blue())
    } else if days < 0 && event.event_type == EventType::Assignment {
        format!("  {}", "past due".red())
    } else {
        String::new()
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            "day" => "days",
            _ => word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(event_type: EventType, date: NaiveDate) -> CalendarEvent {
        CalendarEvent {
            id: 1,
            title: "Problem set 4".to_string(),
            date,
            event_type,
            description: None,
            raw_text: "Problem set 4 due 10/5".to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_upcoming_event_shows_days_left() {
        let rendered = render_event(&event(EventType::Assignment, day(2025, 10, 5)), day(2025, 10, 1));
        assert!(rendered.contains("in 4 days"), "Got: {}", rendered);
    }

    #[test]
    fn test_overdue_assignment_shows_past_due() {
        let rendered = render_event(&event(EventType::Assignment, day(2025, 10, 5)), day(2025, 10, 20));
        assert!(rendered.contains("past due"), "Got: {}", rendered);
    }

    #[test]
    fn test_past_non_assignment_has_no_tag() {
        let rendered = render_event(&event(EventType::Class, day(2025, 10, 5)), day(2025, 10, 20));
        assert!(!rendered.contains("past due"), "Got: {}", rendered);
        assert!(!rendered.contains("in "), "Got: {}", rendered);
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("event", 1), "event");
        assert_eq!(pluralize("event", 3), "events");
        assert_eq!(pluralize("day", 2), "days");
    }
}
