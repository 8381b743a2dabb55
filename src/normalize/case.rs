use std::borrow::Cow;

/// Lowercases ASCII letters when `ignore_case` is set.
///
/// Only applied to the bytes fed to the checksum. Displayed text and the
/// counts keep the original case.
pub fn fold_case(text: &str, ignore_case: bool) -> Cow<'_, str> {
    if ignore_case && text.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(text.to_ascii_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}
