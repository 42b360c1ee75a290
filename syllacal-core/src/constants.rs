//! Tunable heuristics for the extraction pipeline.

/// Two-digit years below this pivot resolve to 2000+, the rest to 1900+.
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

/// Minimum length for an accepted event title.
pub const MIN_TITLE_LEN: usize = 3;

/// Titles shorter than this trigger the neighboring-line fallback.
pub const SHORT_TITLE_LEN: usize = 5;

/// Neighboring lines must be longer than this to qualify as title context.
pub const CONTEXT_MIN_LINE_LEN: usize = 10;

/// Maximum length of a title assembled from context lines.
pub const CONTEXT_TITLE_MAX_LEN: usize = 80;

/// How many leading characters of the normalized title feed the dedup key.
pub const DEDUP_TITLE_PREFIX_LEN: usize = 20;
