/*!
 * Tests for app configuration
 */

use kinobot::Config;
use std::io::Write;

#[test]
fn test_fromFile_withValidJson_shouldLoadAndValidate() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"{{
            "source_language": "en",
            "target_language": "de",
            "translation": {{
                "endpoint": "http://translate.local:5001/translate",
                "timeout_secs": 5
            }}
        }}"#
    )
    .expect("Failed to write config");

    let config = Config::from_file(file.path()).expect("Failed to load config");
    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "de");
    assert_eq!(config.translation.endpoint, "http://translate.local:5001/translate");
    assert_eq!(config.translation.timeout_secs, 5);
}

#[test]
fn test_fromFile_withMissingFile_shouldFail() {
    let result = Config::from_file("/nonexistent/kinobot-config.json");
    assert!(result.is_err());
}

#[test]
fn test_fromFile_withInvalidJson_shouldFail() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "not json at all").expect("Failed to write config");

    let result = Config::from_file(file.path());
    assert!(result.is_err());
}

#[test]
fn test_fromFile_withInvalidValues_shouldFailValidation() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, r#"{{"translation": {{"endpoint": "", "timeout_secs": 15}}}}"#)
        .expect("Failed to write config");

    let result = Config::from_file(file.path());
    assert!(result.is_err());
}

#[test]
fn test_serialization_shouldRoundTrip() {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).expect("Failed to serialize");
    let parsed: Config = serde_json::from_str(&json).expect("Failed to parse");

    assert_eq!(parsed.source_language, config.source_language);
    assert_eq!(parsed.target_language, config.target_language);
    assert_eq!(parsed.translation.endpoint, config.translation.endpoint);
    assert_eq!(parsed.translation.timeout_secs, config.translation.timeout_secs);
}
