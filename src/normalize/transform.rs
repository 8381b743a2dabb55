use super::policy::{NonAlphaNumPolicy, WhitespacePolicy};

/// ASCII letters and digits. Every other character, Unicode letters
/// included, counts as non-alphanumeric.
pub fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Non-alphanumeric and not whitespace.
fn is_symbol(c: char) -> bool {
    !is_alphanumeric(c) && !c.is_whitespace()
}

/// One text transform per (whitespace, non-alphanumeric) policy pair.
///
/// Several pairs share a transform; [`Transform::resolve`] is the only
/// mapping between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Identity,
    SymbolsToSpace,
    StripSymbols,
    Trim,
    SymbolsToSpaceTrimmed,
    Compress,
    NonAlphaNumToSpace,
    StripSymbolsCompressed,
    StripNonAlphaNum,
}

impl Transform {
    pub fn resolve(whitespace: WhitespacePolicy, non_alpha_num: NonAlphaNumPolicy) -> Self {
        use NonAlphaNumPolicy as N;
        use WhitespacePolicy as W;

        match (whitespace, non_alpha_num) {
            (W::None, N::None) => Transform::Identity,
            (W::None, N::Whitespace) => Transform::SymbolsToSpace,
            (W::None, N::Ignore) | (W::Trim, N::Ignore) => Transform::StripSymbols,
            (W::Trim, N::None) => Transform::Trim,
            (W::Trim, N::Whitespace) => Transform::SymbolsToSpaceTrimmed,
            (W::Normalize, N::None) | (W::Ignore, N::None) => Transform::Compress,
            (W::Normalize, N::Whitespace) => Transform::NonAlphaNumToSpace,
            (W::Normalize, N::Ignore) => Transform::StripSymbolsCompressed,
            (W::Ignore, N::Whitespace) | (W::Ignore, N::Ignore) => Transform::StripNonAlphaNum,
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Transform::Identity => text.to_string(),
            Transform::SymbolsToSpace => replace_runs(text, is_symbol, Some(' ')),
            Transform::StripSymbols => replace_runs(text, is_symbol, None),
            Transform::Trim => text.trim().to_string(),
            Transform::SymbolsToSpaceTrimmed => {
                replace_runs(text, is_symbol, Some(' ')).trim().to_string()
            }
            Transform::Compress => compress_whitespace(text),
            Transform::NonAlphaNumToSpace => {
                replace_runs(text, |c| !is_alphanumeric(c), Some(' '))
                    .trim()
                    .to_string()
            }
            Transform::StripSymbolsCompressed => {
                compress_whitespace(&replace_runs(text, is_symbol, None))
            }
            Transform::StripNonAlphaNum => text.chars().filter(|&c| is_alphanumeric(c)).collect(),
        }
    }
}

/// Replaces each maximal run of characters matching `pred` with
/// `replacement`, or drops the run when there is none.
fn replace_runs(text: &str, pred: impl Fn(char) -> bool, replacement: Option<char>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if pred(c) {
            if !in_run {
                out.extend(replacement);
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Trims, then collapses every inner whitespace run to one space.
pub fn compress_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Source text as it will be hashed, before case folding.
pub fn normalize(
    source: &str,
    whitespace: WhitespacePolicy,
    non_alpha_num: NonAlphaNumPolicy,
) -> String {
    Transform::resolve(whitespace, non_alpha_num).apply(source)
}
