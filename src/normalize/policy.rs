use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigurationError;

/// What happens to whitespace before hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespacePolicy {
    #[default]
    None,
    /// Leading and trailing whitespace removed.
    Trim,
    /// Trimmed, inner runs collapsed to one space.
    Normalize,
    Ignore,
}

impl WhitespacePolicy {
    pub const ALL: [WhitespacePolicy; 4] = [
        WhitespacePolicy::None,
        WhitespacePolicy::Trim,
        WhitespacePolicy::Normalize,
        WhitespacePolicy::Ignore,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WhitespacePolicy::None => "none",
            WhitespacePolicy::Trim => "trim",
            WhitespacePolicy::Normalize => "normalize",
            WhitespacePolicy::Ignore => "ignore",
        }
    }
}

impl fmt::Display for WhitespacePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WhitespacePolicy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WhitespacePolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownWhitespacePolicy(s.to_string()))
    }
}

/// What happens to characters outside `A-Z a-z 0-9` before hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonAlphaNumPolicy {
    #[default]
    None,
    /// Runs become a single space.
    Whitespace,
    /// Removed.
    Ignore,
}

impl NonAlphaNumPolicy {
    pub const ALL: [NonAlphaNumPolicy; 3] = [
        NonAlphaNumPolicy::None,
        NonAlphaNumPolicy::Whitespace,
        NonAlphaNumPolicy::Ignore,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NonAlphaNumPolicy::None => "none",
            NonAlphaNumPolicy::Whitespace => "whitespace",
            NonAlphaNumPolicy::Ignore => "ignore",
        }
    }
}

impl fmt::Display for NonAlphaNumPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NonAlphaNumPolicy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NonAlphaNumPolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownNonAlphaNumPolicy(s.to_string()))
    }
}
