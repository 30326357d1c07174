//! Integration tests for the text segment codec

use sortkey_codec::{decode_text, encode_text};

#[test]
fn rejects_separator_and_leading_dot() {
    assert!(encode_text("#").unwrap_err().is_invalid_value());
    assert!(encode_text(".leading").unwrap_err().is_invalid_value());
}

#[test]
fn accepts_punctuation_only_names() {
    for text in ["-", "_", "a.b-c_1"] {
        let token = encode_text(text).unwrap();
        assert_eq!(decode_text(token.as_str()).unwrap(), text);
    }
}

#[test]
fn accepts_uuids() {
    let id = "68454610-5cfd-40da-8689-d6719217cde8";
    assert_eq!(encode_text(id).unwrap().as_str(), format!("[S]{id}"));
}
