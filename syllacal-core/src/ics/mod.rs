//! ICS (iCalendar) serialization of extracted events.

mod generate;

pub use generate::generate_ics;
