use super::engine::{ChecksumEngine, ChecksumState};

impl ChecksumEngine {
    /// Folds line checksums, in order, into one document checksum.
    ///
    /// - no input: the empty-text checksum
    /// - one input: returned unchanged
    /// - otherwise: seed with `N - 1` (low byte), then feed each state's
    ///   bytes from byte 7 down to byte 0
    ///
    /// The result depends on both the order and the number of inputs.
    pub fn aggregate(&self, checksums: &[ChecksumState]) -> ChecksumState {
        match checksums {
            [] => ChecksumState::EMPTY,
            [single] => *single,
            _ => {
                let mut state = ChecksumState::EMPTY;
                self.update(&mut state, ((checksums.len() - 1) & 0xFF) as u8);
                for checksum in checksums {
                    for &byte in checksum.as_bytes().iter().rev() {
                        self.update(&mut state, byte);
                    }
                }
                state
            }
        }
    }
}

/// [`ChecksumEngine::aggregate`] on the standard engine.
pub fn aggregate(checksums: &[ChecksumState]) -> ChecksumState {
    ChecksumEngine::standard().aggregate(checksums)
}
