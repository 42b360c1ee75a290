//! Event types extracted from a syllabus.
//!
//! These are the output entities of the extraction pipeline. The serialized
//! form matches the JSON the web UI consumes, so field names and type tags
//! stay camelCase/lowercase on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Semantic category of a syllabus event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Assignment,
    Exam,
    Reading,
    Deadline,
    Holiday,
    Class,
    Other,
}

impl EventType {
    /// Human-readable label for display layers.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Assignment => "Assignment",
            EventType::Exam => "Exam",
            EventType::Reading => "Reading",
            EventType::Deadline => "Deadline",
            EventType::Holiday => "Holiday",
            EventType::Class => "Class",
            EventType::Other => "Event",
        }
    }

    /// Icon glyph used by the CLI list view.
    pub fn icon(&self) -> &'static str {
        match self {
            EventType::Assignment => "📋",
            EventType::Exam => "📝",
            EventType::Reading => "📚",
            EventType::Deadline => "⏰",
            EventType::Holiday => "🎉",
            EventType::Class => "🎓",
            EventType::Other => "📌",
        }
    }
}

/// A calendar event extracted from syllabus text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Sequential within one extraction run, assigned in discovery order.
    /// Not stable across runs.
    pub id: u32,
    pub title: String,
    /// All-day date; syllabi carry no reliable time-of-day information.
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// The source line, kept only when it says more than the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unmodified source line, always retained for audit and export.
    #[serde(rename = "rawText")]
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_event_serializes_to_wire_format() {
        let event = CalendarEvent {
            id: 1,
            title: "Homework 1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 2).unwrap(),
            event_type: EventType::Assignment,
            description: None,
            raw_text: "Homework 1 due 9/2".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""type":"assignment""#), "Got: {}", json);
        assert!(json.contains(r#""date":"2025-09-02""#), "Got: {}", json);
        assert!(json.contains(r#""rawText":"Homework 1 due 9/2""#), "Got: {}", json);
        // Absent description is omitted, not null
        assert!(!json.contains("description"), "Got: {}", json);
    }

    #[test]
    fn test_event_type_round_trips_lowercase() {
        let json = serde_json::to_string(&EventType::Exam).unwrap();
        assert_eq!(json, r#""exam""#);

        let back: EventType = serde_json::from_str(r#""holiday""#).unwrap();
        assert_eq!(back, EventType::Holiday);
    }
}
