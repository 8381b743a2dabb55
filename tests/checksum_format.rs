use content_checksum::checksum::{compute, ChecksumParseError, ChecksumState};
use content_checksum::WideCharPolicy;

#[test]
fn golden_canonical_group_order() {
    let state = ChecksumState::from_bytes([0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
    assert_eq!(state.to_string(), "EFCD-AB89-6745-2301");
    assert_eq!(state.to_words(), [0x2301, 0x6745, 0xAB89, 0xEFCD]);
}

#[test]
fn invariant_parse_inverts_display() {
    let state = compute("hello world", WideCharPolicy::Truncate).unwrap();
    let parsed: ChecksumState = state.to_string().parse().unwrap();
    assert_eq!(parsed, state);
}

#[test]
fn invariant_parse_accepts_lowercase_hex() {
    let parsed: ChecksumState = "4630-c0fb-d526-53c1".parse().unwrap();
    assert_eq!(parsed.to_string(), "4630-C0FB-D526-53C1");
}

#[test]
fn invariant_parse_rejects_malformed_input() {
    assert_eq!(
        "4630-C0FB-D526".parse::<ChecksumState>(),
        Err(ChecksumParseError::GroupCount(3))
    );
    assert!(matches!(
        "4630-C0FB-D52-653C1".parse::<ChecksumState>(),
        Err(ChecksumParseError::GroupLength { index: 2, .. })
    ));
    assert!(matches!(
        "4630-C0FB-D526-53CG".parse::<ChecksumState>(),
        Err(ChecksumParseError::InvalidHex(_))
    ));
    assert!("".parse::<ChecksumState>().is_err());
}

#[test]
fn golden_serde_uses_canonical_string() {
    let state = compute("a", WideCharPolicy::Truncate).unwrap();
    let json = serde_json::to_string(&state).unwrap();
    assert_eq!(json, "\"5BB0-0000-0000-0000\"");

    let back: ChecksumState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);

    assert!(serde_json::from_str::<ChecksumState>("\"not-a-checksum\"").is_err());
}
