//! Tests for the serde hook: canonical strings out, strings or raw byte
//! counts in, across JSON and TOML.

use datasize::ByteSize;
use serde::{Deserialize, Serialize};

#[test]
fn serializes_as_the_canonical_string() {
    assert_eq!(serde_json::to_string(&ByteSize::KB).unwrap(), r#""1KB""#);
    assert_eq!(
        serde_json::to_string(&(2048 * ByteSize::MB)).unwrap(),
        r#""2GB""#
    );
    assert_eq!(
        serde_json::to_string(&(ByteSize::B + ByteSize::KB)).unwrap(),
        r#""1025B""#
    );
}

#[test]
fn deserializes_from_a_json_string() {
    let size: ByteSize = serde_json::from_str(r#""2GB""#).unwrap();
    assert_eq!(size, 2 * ByteSize::GB);

    let size: ByteSize = serde_json::from_str(r#""10.5 MB""#).unwrap();
    assert_eq!(size.bytes(), 11_010_048);
}

#[test]
fn deserializes_from_a_json_integer() {
    let size: ByteSize = serde_json::from_str("1048576").unwrap();
    assert_eq!(size, ByteSize::MB);
}

#[test]
fn json_round_trip_preserves_the_value() {
    let original = ByteSize::new(123_456_789);
    let text = serde_json::to_string(&original).unwrap();
    let restored: ByteSize = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn rejects_invalid_strings_with_the_parser_message() {
    let err = serde_json::from_str::<ByteSize>(r#""10 Mb""#).unwrap_err();
    assert!(err.to_string().contains("bits, not bytes"));

    let err = serde_json::from_str::<ByteSize>(r#""50 eB""#).unwrap_err();
    assert!(err.to_string().contains("out of 64-bit range"));
}

#[test]
fn rejects_negative_integers() {
    assert!(serde_json::from_str::<ByteSize>("-1").is_err());
}

#[derive(Debug, Serialize, Deserialize)]
struct RetentionConfig {
    max_total_size: ByteSize,
    max_file_size: ByteSize,
}

#[test]
fn works_as_a_toml_config_field() {
    let config: RetentionConfig = toml::from_str(
        r#"
max_total_size = "1.5 GB"
max_file_size = 1048576
"#,
    )
    .unwrap();

    assert_eq!(config.max_total_size.bytes(), 1_610_612_736);
    assert_eq!(config.max_file_size, ByteSize::MB);
}

#[test]
fn serializes_toml_fields_as_canonical_strings() {
    let config = RetentionConfig {
        max_total_size: 500 * ByteSize::MB,
        max_file_size: ByteSize::new(1025),
    };

    let text = toml::to_string(&config).unwrap();
    assert!(text.contains(r#"max_total_size = "500MB""#));
    assert!(text.contains(r#"max_file_size = "1025B""#));
}
