//! ICS file generation.

use chrono::{Duration, NaiveDate};
use icalendar::{Calendar, Component, Property, ValueType};
use uuid::Uuid;

use crate::error::{SyllacalError, SyllacalResult};
use crate::event::CalendarEvent;

/// Generate .ics content for a list of extracted events.
///
/// Events are emitted as all-day VEVENTs: DTSTART is the event date and
/// DTEND the following day, per the all-day convention. DESCRIPTION falls
/// back to the raw source line when the event has no separate description.
///
/// The extraction pipeline never produces an empty title, but events can
/// also arrive from deserialized client JSON; those are rejected here
/// rather than serialized into a VEVENT with a blank SUMMARY.
pub fn generate_ics(events: &[CalendarEvent]) -> SyllacalResult<String> {
    let mut cal = Calendar::new();

    for event in events {
        if event.title.trim().is_empty() {
            return Err(SyllacalError::IcsGenerate(format!(
                "event {} has an empty title",
                event.id
            )));
        }

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&format!("{}@syllacal", Uuid::new_v4()));
        ics_event.summary(&event.title);
        ics_event.description(event.description.as_deref().unwrap_or(&event.raw_text));

        // DTSTAMP - required by RFC 5545
        let dtstamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        ics_event.add_property("DTSTAMP", &dtstamp);

        add_date_property(&mut ics_event, "DTSTART", event.date);
        add_date_property(&mut ics_event, "DTEND", event.date + Duration::days(1));

        cal.push(ics_event.done());
    }

    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string()))
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with SYLLACAL
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:SYLLACAL\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Add an all-day date property (VALUE=DATE)
fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}
