//! Line segmentation.

/// Split raw text into trimmed, non-empty lines, preserving source order.
///
/// Order matters: the title extractor looks at neighboring lines for
/// context, so indices into the returned Vec are positions in the text.
pub(super) fn segment_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
