use content_checksum::checksum::{aggregate, compute, ChecksumState};
use content_checksum::WideCharPolicy;

fn checksum(text: &str) -> ChecksumState {
    compute(text, WideCharPolicy::Truncate).unwrap()
}

#[test]
fn invariant_no_inputs_is_empty_checksum() {
    assert_eq!(aggregate(&[]), ChecksumState::EMPTY);
}

#[test]
fn invariant_single_input_is_unchanged() {
    let line = checksum("only line");
    assert_eq!(aggregate(&[line]), line);
}

#[test]
fn golden_two_line_aggregate() {
    let alpha = checksum("alpha");
    let beta = checksum("beta");

    assert_eq!(aggregate(&[alpha, beta]).to_string(), "EBCB-EE37-C95E-359F");
    assert_eq!(aggregate(&[beta, alpha]).to_string(), "EBCB-856D-E570-56CF");
}

#[test]
fn invariant_aggregate_is_order_sensitive() {
    let x = checksum("x");
    let y = checksum("y");
    assert_eq!(aggregate(&[x, y]).to_string(), "D29B-7000-0000-8FB8");
    assert_ne!(aggregate(&[x, y]), aggregate(&[y, x]));
}

#[test]
fn invariant_aggregate_is_length_sensitive() {
    let x = checksum("x");
    let y = checksum("y");
    let blank = checksum("");

    let with_blank = aggregate(&[x, blank, y]);
    assert_eq!(with_blank.to_string(), "CFAC-2200-0000-C0A1");
    assert_ne!(with_blank, aggregate(&[x, y]));
}

#[test]
fn invariant_two_blank_lines_differ_from_one() {
    let blank = checksum("");
    assert_eq!(aggregate(&[blank]), ChecksumState::EMPTY);
    assert_eq!(aggregate(&[blank, blank]).to_string(), "01DB-7000-0000-0000");
}

#[test]
fn invariant_count_seed_wraps_at_one_byte() {
    // 257 inputs seed with 256 & 0xFF == 0, so all-zero inputs stay zero.
    let blanks = vec![checksum(""); 257];
    assert_eq!(aggregate(&blanks), ChecksumState::EMPTY);
}
