use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::line::{split_lines, Line};
use super::stats::DocumentStats;
use crate::checksum::{ChecksumEngine, ChecksumError, ChecksumParseError, ChecksumState};
use crate::config::{NonAlphaNumPolicy, NormalizationConfig, WhitespacePolicy};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
    #[error("Expected checksum is malformed: {0}")]
    InvalidExpectedChecksum(#[from] ChecksumParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMode {
    SingleLine,
    MultiLine,
}

impl LineMode {
    fn of(config: &NormalizationConfig) -> Self {
        if config.multiline {
            LineMode::MultiLine
        } else {
            LineMode::SingleLine
        }
    }
}

/// A fully computed snapshot: lines, document checksum and counts.
///
/// Never mutated. Every edit goes through one of the `with_*` methods,
/// which build a new value and leave `self` as it was, also on error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    source_text: String,
    config: NormalizationConfig,
    mode: LineMode,
    lines: Vec<Line>,
    checksum: ChecksumState,
    #[serde(flatten)]
    stats: DocumentStats,
}

impl Default for Document {
    /// Empty text, default configuration: one blank line hashed to the
    /// empty checksum.
    fn default() -> Self {
        let config = NormalizationConfig::default();
        let line = Line::blank(0);
        let stats = DocumentStats::collect("", std::slice::from_ref(&line));

        Document {
            source_text: String::new(),
            config,
            mode: LineMode::SingleLine,
            lines: vec![line],
            checksum: ChecksumState::EMPTY,
            stats,
        }
    }
}

impl Document {
    /// Splits, normalizes, hashes and counts `source_text`.
    ///
    /// In single-line mode the whole text is one line, line breaks included.
    pub fn compute(
        source_text: impl Into<String>,
        config: NormalizationConfig,
    ) -> Result<Self, DocumentError> {
        let source_text = source_text.into();
        let engine = ChecksumEngine::standard();
        let mode = LineMode::of(&config);

        let span = tracing::debug_span!("checksum.document", mode = ?mode);
        let _guard = span.enter();

        let sources = match mode {
            LineMode::MultiLine => split_lines(&source_text),
            LineMode::SingleLine => vec![source_text.as_str()],
        };

        let lines = sources
            .into_iter()
            .enumerate()
            .map(|(index, source)| Line::build(&engine, index, source, &config))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                warn!(error = %err, "checksum_rejected");
                err
            })?;

        let present: Vec<ChecksumState> = lines.iter().filter_map(Line::checksum).collect();
        let checksum = engine.aggregate(&present);
        let stats = DocumentStats::collect(&source_text, &lines);

        debug!(
            line_count = stats.line_count,
            char_count = stats.char_count,
            word_count = stats.word_count,
            checksum = %checksum,
            "document_computed"
        );

        Ok(Document {
            source_text,
            config,
            mode,
            lines,
            checksum,
            stats,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn config(&self) -> &NormalizationConfig {
        &self.config
    }

    pub fn mode(&self) -> LineMode {
        self.mode
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn checksum(&self) -> ChecksumState {
        self.checksum
    }

    /// Canonical `WWWW-WWWW-WWWW-WWWW` form of the document checksum.
    pub fn checksum_string(&self) -> String {
        self.checksum.to_string()
    }

    pub fn stats(&self) -> DocumentStats {
        self.stats
    }

    pub fn char_count(&self) -> usize {
        self.stats.char_count
    }

    pub fn word_count(&self) -> usize {
        self.stats.word_count
    }

    pub fn line_count(&self) -> usize {
        self.stats.line_count
    }

    /// Recomputes for new text, same configuration.
    pub fn with_text(&self, source_text: impl Into<String>) -> Result<Self, DocumentError> {
        Document::compute(source_text, self.config.clone())
    }

    /// Recomputes under `config`, switching line mode when its `multiline`
    /// flag differs.
    ///
    /// Going from multi-line to single-line keeps only the first line; the
    /// rest of the text is discarded. Going the other way re-splits the
    /// current text.
    pub fn with_config(&self, config: NormalizationConfig) -> Result<Self, DocumentError> {
        let source_text = match (self.mode, LineMode::of(&config)) {
            (LineMode::MultiLine, LineMode::SingleLine) => self
                .lines
                .first()
                .map(|line| line.source().to_string())
                .unwrap_or_default(),
            _ => self.source_text.clone(),
        };
        Document::compute(source_text, config)
    }

    pub fn with_multiline(&self, multiline: bool) -> Result<Self, DocumentError> {
        self.with_config(self.config.clone().with_multiline(multiline))
    }

    pub fn with_ignore_blank_lines(&self, ignore: bool) -> Result<Self, DocumentError> {
        self.with_config(self.config.clone().with_ignore_blank_lines(ignore))
    }

    pub fn with_ignore_case(&self, ignore_case: bool) -> Result<Self, DocumentError> {
        self.with_config(self.config.clone().with_ignore_case(ignore_case))
    }

    pub fn with_whitespace_policy(&self, policy: WhitespacePolicy) -> Result<Self, DocumentError> {
        self.with_config(self.config.clone().with_whitespace(policy))
    }

    pub fn with_non_alpha_num_policy(
        &self,
        policy: NonAlphaNumPolicy,
    ) -> Result<Self, DocumentError> {
        self.with_config(self.config.clone().with_non_alpha_num(policy))
    }
}

/// Builds a [`Document`] for `source_text` under `config`.
pub fn compute_document(
    source_text: &str,
    config: &NormalizationConfig,
) -> Result<Document, DocumentError> {
    Document::compute(source_text, config.clone())
}

/// Recomputes the document checksum of `source_text` and compares it with
/// `expected` in canonical form.
///
/// A malformed `expected` is an error, a well-formed mismatch is `Ok(false)`.
pub fn verify_checksum(
    source_text: &str,
    config: &NormalizationConfig,
    expected: &str,
) -> Result<bool, DocumentError> {
    let expected: ChecksumState = expected.trim().parse()?;
    let document = compute_document(source_text, config)?;
    Ok(document.checksum() == expected)
}
