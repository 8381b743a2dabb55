use content_checksum::{compute_document, NormalizationConfig};

#[test]
fn golden_document_serialization() {
    let config = NormalizationConfig::default()
        .with_multiline(true)
        .with_ignore_blank_lines(true);

    let doc = compute_document("alpha\n\nbeta", &config).unwrap();
    let json = serde_json::to_string_pretty(&doc).unwrap();

    const EXPECTED_JSON: &str = r#"{
  "source_text": "alpha\n\nbeta",
  "config": {
    "whitespace": "none",
    "non_alpha_num": "none",
    "ignore_case": false,
    "multiline": true,
    "ignore_blank_lines": true,
    "wide_chars": "truncate"
  },
  "mode": "multi_line",
  "lines": [
    {
      "index": 0,
      "source": "alpha",
      "transformed": "alpha",
      "checksum": "5BE7-C151-1BB0-0000"
    },
    {
      "index": 1,
      "source": "",
      "transformed": "",
      "checksum": null
    },
    {
      "index": 2,
      "source": "beta",
      "transformed": "beta",
      "checksum": "5BF7-9D29-6000-0000"
    }
  ],
  "checksum": "EBCB-EE37-C95E-359F",
  "char_count": 9,
  "word_count": 2,
  "line_count": 2
}"#;

    assert_eq!(json, EXPECTED_JSON, "Golden snapshot mismatch");
}

#[test]
fn golden_serialization_is_deterministic() {
    let config = NormalizationConfig::default().with_multiline(true);
    let text = "one\r\ntwo\rthree\n";

    let first = serde_json::to_string(&compute_document(text, &config).unwrap()).unwrap();
    let second = serde_json::to_string(&compute_document(text, &config).unwrap()).unwrap();
    assert_eq!(first, second, "Document output is not deterministic");
}
