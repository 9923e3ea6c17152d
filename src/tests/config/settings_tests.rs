//! Tests for IndentConfig deserialization.

use crate::config::IndentConfig;

#[test]
fn deserialize_from_json() {
    let cfg: IndentConfig = serde_json::from_str(r#"{"amount": 2}"#).unwrap();
    assert_eq!(cfg, IndentConfig::new().with_amount(2));

    let cfg: IndentConfig = serde_json::from_str(r#"{"string": "> "}"#).unwrap();
    assert_eq!(cfg.string.as_deref(), Some("> "));

    let cfg: IndentConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, IndentConfig::default());
}

#[test]
fn unknown_keys_are_rejected() {
    let result = serde_json::from_str::<IndentConfig>(r#"{"width": 2}"#);
    assert!(result.is_err());
}

#[cfg(feature = "json")]
#[test]
fn from_json_str_reports_parse_errors() {
    use crate::error::ConfigError;

    let cfg = IndentConfig::from_json_str(r#"{"amount": 8}"#).unwrap();
    assert_eq!(cfg.amount, Some(8));

    let err = IndentConfig::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { format: "json", .. }));
}

#[cfg(feature = "yaml")]
#[test]
fn from_yaml_str_reads_string_prefix() {
    let cfg = IndentConfig::from_yaml_str("string: \"| \"\n").unwrap();
    assert_eq!(cfg.string.as_deref(), Some("| "));
    assert_eq!(cfg.amount, None);
}
