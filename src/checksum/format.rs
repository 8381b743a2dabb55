//! Canonical string form: four 16-bit groups, most significant first,
//! uppercase hex, joined by hyphens (`WWWW-WWWW-WWWW-WWWW`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::engine::ChecksumState;

const GROUPS: usize = 4;
const GROUP_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChecksumParseError {
    #[error("Checksum must have 4 hyphen-separated groups, found {0}")]
    GroupCount(usize),
    #[error("Checksum group {index} must be 4 hex digits, found {found:?}")]
    GroupLength { index: usize, found: String },
    #[error("Checksum contains invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl fmt::Display for ChecksumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut big_endian = *self.as_bytes();
        big_endian.reverse();
        let digits = hex::encode_upper(big_endian);
        write!(
            f,
            "{}-{}-{}-{}",
            &digits[0..4],
            &digits[4..8],
            &digits[8..12],
            &digits[12..16]
        )
    }
}

impl FromStr for ChecksumState {
    type Err = ChecksumParseError;

    /// Parses the canonical form. Hex digits may be either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups: Vec<&str> = s.split('-').collect();
        if groups.len() != GROUPS {
            return Err(ChecksumParseError::GroupCount(groups.len()));
        }
        for (index, group) in groups.iter().enumerate() {
            if group.len() != GROUP_LEN {
                return Err(ChecksumParseError::GroupLength {
                    index,
                    found: group.to_string(),
                });
            }
        }

        let mut bytes = [0u8; 8];
        hex::decode_to_slice(groups.concat(), &mut bytes)?;
        bytes.reverse();
        Ok(ChecksumState::from_bytes(bytes))
    }
}

impl From<ChecksumState> for String {
    fn from(state: ChecksumState) -> Self {
        state.to_string()
    }
}

impl TryFrom<String> for ChecksumState {
    type Error = ChecksumParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
