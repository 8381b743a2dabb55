use serde::Serialize;

use super::line::Line;
use crate::normalize::is_alphanumeric;

/// Counts reported alongside the document checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DocumentStats {
    /// Characters of transformed text across all lines, before case folding.
    pub char_count: usize,
    /// Words in the source text.
    pub word_count: usize,
    /// Lines that carry a checksum.
    pub line_count: usize,
}

impl DocumentStats {
    pub fn collect(source_text: &str, lines: &[Line]) -> Self {
        DocumentStats {
            char_count: lines.iter().map(Line::char_count).sum(),
            word_count: word_count(source_text),
            line_count: lines.iter().filter(|line| !line.is_ignored()).count(),
        }
    }
}

/// Number of non-empty tokens left after splitting the trimmed text on runs
/// of non-alphanumeric characters.
pub fn word_count(text: &str) -> usize {
    text.trim()
        .split(|c: char| !is_alphanumeric(c))
        .filter(|token| !token.is_empty())
        .count()
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
