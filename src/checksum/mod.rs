pub mod aggregate;
pub mod engine;
pub mod format;

pub use aggregate::aggregate;
pub use engine::{ChecksumEngine, ChecksumError, ChecksumState, Checksummer, CHECKSUM_TABLE};
pub use format::ChecksumParseError;

use crate::config::WideCharPolicy;

/// Checksum of `text` on the standard engine.
pub fn compute(text: &str, policy: WideCharPolicy) -> Result<ChecksumState, ChecksumError> {
    ChecksumEngine::standard().compute(text, policy)
}
