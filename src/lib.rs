//! Deterministic content checksums for normalized text.
//!
//! `content-checksum` normalizes a document line by line, hashes each line
//! with a table-driven 64-bit rolling checksum and folds the line checksums
//! into one document checksum, rendered as `WWWW-WWWW-WWWW-WWWW`. All
//! operations are pure: identical text and configuration always produce the
//! same checksum, byte-for-byte.
//!
//! ```
//! use content_checksum::{compute_document, NonAlphaNumPolicy, NormalizationConfig, WhitespacePolicy};
//!
//! let config = NormalizationConfig::default()
//!     .with_whitespace(WhitespacePolicy::Normalize)
//!     .with_non_alpha_num(NonAlphaNumPolicy::Ignore)
//!     .with_ignore_case(true);
//!
//! let doc = compute_document("Hello, World!", &config).unwrap();
//! assert_eq!(doc.lines()[0].transformed(), "Hello World");
//! assert_eq!(doc.word_count(), 2);
//! ```

pub mod checksum;
pub mod config;
pub mod document;
pub mod normalize;

pub use checksum::{ChecksumEngine, ChecksumError, ChecksumParseError, ChecksumState};
pub use config::{
    ConfigurationError, NonAlphaNumPolicy, NormalizationConfig, WhitespacePolicy, WideCharPolicy,
};
pub use document::{compute_document, verify_checksum, Document, DocumentError, Line, LineMode};
