//! Error types for the syllacal ecosystem.

use thiserror::Error;

/// Errors that can occur in syllacal operations.
#[derive(Error, Debug)]
pub enum SyllacalError {
    #[error("ICS generation error: {0}")]
    IcsGenerate(String),
}

/// Result type alias for syllacal operations.
pub type SyllacalResult<T> = Result<T, SyllacalError>;
