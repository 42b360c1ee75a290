//! Syllabus input loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read syllabus text from a file.
///
/// `.pdf` files go through text extraction; anything else is read as
/// plain text.
pub fn read_syllabus(path: &Path) -> Result<String> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        pdf_extract::extract_text(path)
            .map_err(|e| anyhow::anyhow!("Failed to extract text from {}: {e}", path.display()))
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
