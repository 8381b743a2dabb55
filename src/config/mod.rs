use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::normalize::policy::{NonAlphaNumPolicy, WhitespacePolicy};

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Unknown whitespace policy: {0:?}")]
    UnknownWhitespacePolicy(String),
    #[error("Unknown non-alphanumeric policy: {0:?}")]
    UnknownNonAlphaNumPolicy(String),
    #[error("Unknown wide character policy: {0:?}")]
    UnknownWideCharPolicy(String),
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// How characters above U+00FF are turned into checksum input bytes.
///
/// Text is hashed one byte per Unicode scalar value, never as UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WideCharPolicy {
    /// Hash the low eight bits of the code point.
    #[default]
    Truncate,
    /// Fail with [`ChecksumError::CharacterOutOfRange`](crate::checksum::ChecksumError).
    Reject,
}

impl WideCharPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            WideCharPolicy::Truncate => "truncate",
            WideCharPolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for WideCharPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WideCharPolicy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" => Ok(WideCharPolicy::Truncate),
            "reject" => Ok(WideCharPolicy::Reject),
            other => Err(ConfigurationError::UnknownWideCharPolicy(other.to_string())),
        }
    }
}

/// Everything that decides how a text becomes a checksum.
///
/// Serializable and comparable. Missing JSON fields take their defaults,
/// unknown policy names are rejected.
///
/// ```json
/// {
///   "whitespace": "normalize",
///   "non_alpha_num": "ignore",
///   "ignore_case": true,
///   "multiline": false,
///   "ignore_blank_lines": false,
///   "wide_chars": "truncate"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizationConfig {
    pub whitespace: WhitespacePolicy,
    pub non_alpha_num: NonAlphaNumPolicy,
    /// Lowercases ASCII letters in the hashed bytes only.
    pub ignore_case: bool,
    pub multiline: bool,
    pub ignore_blank_lines: bool,
    pub wide_chars: WideCharPolicy,
}

impl NormalizationConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigurationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_whitespace(mut self, policy: WhitespacePolicy) -> Self {
        self.whitespace = policy;
        self
    }

    pub fn with_non_alpha_num(mut self, policy: NonAlphaNumPolicy) -> Self {
        self.non_alpha_num = policy;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn with_ignore_blank_lines(mut self, ignore_blank_lines: bool) -> Self {
        self.ignore_blank_lines = ignore_blank_lines;
        self
    }

    pub fn with_wide_chars(mut self, policy: WideCharPolicy) -> Self {
        self.wide_chars = policy;
        self
    }
}
