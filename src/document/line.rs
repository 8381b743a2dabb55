use serde::Serialize;

use super::stats::char_count;
use crate::checksum::{ChecksumEngine, ChecksumError, ChecksumState};
use crate::config::NormalizationConfig;
use crate::normalize::{fold_case, normalize};

/// Label shown instead of a checksum for a skipped blank line.
pub const IGNORED_LABEL: &str = "(ignored)";

/// One line of a document with its normalized text and checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    index: usize,
    source: String,
    transformed: String,
    checksum: Option<ChecksumState>,
}

impl Line {
    /// Normalizes and hashes `source`.
    ///
    /// The checksum is absent exactly when the transformed text is empty and
    /// blank lines are ignored.
    pub(crate) fn build(
        engine: &ChecksumEngine,
        index: usize,
        source: &str,
        config: &NormalizationConfig,
    ) -> Result<Self, ChecksumError> {
        let transformed = normalize(source, config.whitespace, config.non_alpha_num);

        let checksum = if transformed.is_empty() && config.ignore_blank_lines {
            None
        } else {
            let hashed = fold_case(&transformed, config.ignore_case);
            Some(engine.compute(&hashed, config.wide_chars)?)
        };

        tracing::trace!(
            index,
            transformed_chars = char_count(&transformed),
            checksum = ?checksum.map(|c| c.to_string()),
            "line_computed"
        );

        Ok(Line {
            index,
            source: source.to_string(),
            transformed,
            checksum,
        })
    }

    /// Empty line hashed to the empty checksum.
    pub(crate) fn blank(index: usize) -> Self {
        Line {
            index,
            source: String::new(),
            transformed: String::new(),
            checksum: Some(ChecksumState::EMPTY),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn transformed(&self) -> &str {
        &self.transformed
    }

    /// Characters of transformed text, as counted in the document stats.
    pub fn char_count(&self) -> usize {
        char_count(&self.transformed)
    }

    pub fn checksum(&self) -> Option<ChecksumState> {
        self.checksum
    }

    pub fn is_ignored(&self) -> bool {
        self.checksum.is_none()
    }

    /// Canonical checksum string, or [`IGNORED_LABEL`].
    pub fn checksum_label(&self) -> String {
        match self.checksum {
            Some(checksum) => checksum.to_string(),
            None => IGNORED_LABEL.to_string(),
        }
    }
}

/// Splits on `\r\n`, `\r` or `\n`, each counted as one break.
///
/// Always returns at least one line; a trailing break yields a final empty
/// line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            '\r' => {
                lines.push(&text[start..i]);
                start = i + 1;
                if let Some(&(_, '\n')) = chars.peek() {
                    chars.next();
                    start += 1;
                }
            }
            _ => {}
        }
    }
    lines.push(&text[start..]);
    lines
}
