//! Keyword-based event classification.

use crate::event::EventType;

/// Assign a category from keyword heuristics over the full source line.
///
/// Categories are checked in a fixed order and the first hit wins, so a
/// line mentioning both "final exam" and "class discussion" is an exam.
/// "lab" on its own falls through to a class session; "lab" together with
/// "due" is an assignment ("Lab report due ..."), which is why the
/// assignment check runs before the class check ever sees "lab".
pub(super) fn classify(line: &str) -> EventType {
    let lower = line.to_lowercase();
    let has = |keyword: &str| lower.contains(keyword);

    if has("exam")
        || has("test")
        || has("quiz")
        || has("final")
        || has("midterm")
        || has("practical")
        || has("course end date")
    {
        return EventType::Exam;
    }

    if has("assignment")
        || has("homework")
        || has("hw")
        || has("due")
        || has("submit")
        || has("paper")
        || has("project")
        || (has("lab") && has("due"))
    {
        return EventType::Assignment;
    }

    if has("read") || has("chapter") || has("pages") || has("article") || has("case") {
        return EventType::Reading;
    }

    if has("deadline")
        || has("drop")
        || has("add")
        || has("registration")
        || has("withdraw")
        || has("last day")
    {
        return EventType::Deadline;
    }

    if has("holiday")
        || has("no class")
        || has("break")
        || has("vacation")
        || has("recess")
        || has("no lab")
        || has("no lecture")
    {
        return EventType::Holiday;
    }

    if has("class")
        || has("lecture")
        || has("session")
        || has("seminar")
        || has("discussion")
        || has("lab")
    {
        return EventType::Class;
    }

    EventType::Other
}
