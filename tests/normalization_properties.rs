use content_checksum::normalize::normalize;
use content_checksum::{compute_document, NonAlphaNumPolicy, NormalizationConfig, WhitespacePolicy};
use proptest::prelude::*;

fn whitespace_policy() -> impl Strategy<Value = WhitespacePolicy> {
    prop::sample::select(WhitespacePolicy::ALL.to_vec())
}

fn non_alpha_num_policy() -> impl Strategy<Value = NonAlphaNumPolicy> {
    prop::sample::select(NonAlphaNumPolicy::ALL.to_vec())
}

proptest! {
    #[test]
    fn normalize_is_idempotent(
        text in "[ a-zA-Z0-9,.!\\-\t\u{e9}\u{2014}]{0,40}",
        whitespace in whitespace_policy(),
        non_alpha_num in non_alpha_num_policy(),
    ) {
        let once = normalize(&text, whitespace, non_alpha_num);
        let twice = normalize(&once, whitespace, non_alpha_num);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn document_checksum_is_deterministic(
        text in "[ a-zA-Z0-9,.!\n\r]{0,60}",
        whitespace in whitespace_policy(),
        non_alpha_num in non_alpha_num_policy(),
        ignore_case in any::<bool>(),
        multiline in any::<bool>(),
        ignore_blank_lines in any::<bool>(),
    ) {
        let config = NormalizationConfig::default()
            .with_whitespace(whitespace)
            .with_non_alpha_num(non_alpha_num)
            .with_ignore_case(ignore_case)
            .with_multiline(multiline)
            .with_ignore_blank_lines(ignore_blank_lines);

        let first = compute_document(&text, &config).unwrap();
        let second = compute_document(&text, &config).unwrap();
        prop_assert_eq!(first.checksum_string(), second.checksum_string());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn single_line_document_checksum_equals_line_checksum(
        text in "[ a-zA-Z0-9,.!]{0,40}",
        whitespace in whitespace_policy(),
        non_alpha_num in non_alpha_num_policy(),
    ) {
        let config = NormalizationConfig::default()
            .with_whitespace(whitespace)
            .with_non_alpha_num(non_alpha_num);

        let doc = compute_document(&text, &config).unwrap();
        prop_assert_eq!(doc.lines().len(), 1);
        prop_assert_eq!(doc.lines()[0].checksum(), Some(doc.checksum()));
    }
}
