pub mod document;
pub mod line;
pub mod stats;

pub use document::{compute_document, verify_checksum, Document, DocumentError, LineMode};
pub use line::{split_lines, Line, IGNORED_LABEL};
pub use stats::{char_count, word_count, DocumentStats};
