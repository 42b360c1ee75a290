//! Core types and extraction pipeline for the syllacal ecosystem.
//!
//! This crate provides everything shared by syllacal-cli and syllacal-server:
//! - `CalendarEvent` and `EventType` for extracted syllabus events
//! - `extract` module: the text-to-event extraction pipeline
//! - `ics` module: calendar file generation for export

pub mod constants;
pub mod error;
pub mod event;
pub mod extract;
pub mod ics;

// Re-export the types and entry points callers actually need
pub use error::{SyllacalError, SyllacalResult};
pub use event::{CalendarEvent, EventType};
pub use extract::extract_events;
pub use ics::generate_ics;
