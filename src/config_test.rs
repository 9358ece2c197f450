use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_key_is_set() {
    let config = AppConfig::from_lookup(lookup(&[(FIREBASE_API_KEY_VAR, "k")])).unwrap();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.identity_base_url, DEFAULT_IDENTITY_BASE_URL);
    assert_eq!(config.firebase_api_key, "k");
    assert!(config.has_identity_key());
}

#[test]
fn missing_key_keeps_configured_urls() {
    let config = AppConfig::from_lookup(lookup(&[
        (API_BASE_URL_VAR, "https://api.pollgen.test"),
        (IDENTITY_BASE_URL_VAR, "http://localhost:9099"),
    ]))
    .unwrap();
    assert_eq!(config.api_base_url, "https://api.pollgen.test");
    assert_eq!(config.identity_base_url, "http://localhost:9099");
    assert_eq!(config.firebase_api_key, "");
    assert!(!config.has_identity_key());
}

#[test]
fn empty_lookup_is_the_default_config() {
    assert_eq!(AppConfig::from_lookup(lookup(&[])).unwrap(), AppConfig::default());
}

#[test]
fn blank_values_count_as_unset() {
    let blank_key = AppConfig::from_lookup(lookup(&[(FIREBASE_API_KEY_VAR, "   ")])).unwrap();
    assert!(!blank_key.has_identity_key());
    let config = AppConfig::from_lookup(lookup(&[(FIREBASE_API_KEY_VAR, "k"), (API_BASE_URL_VAR, "")])).unwrap();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn trailing_slashes_are_trimmed() {
    let config = AppConfig::from_lookup(lookup(&[
        (FIREBASE_API_KEY_VAR, "k"),
        (API_BASE_URL_VAR, "https://api.pollgen.test/v1/"),
        (IDENTITY_BASE_URL_VAR, "http://localhost:9099//"),
    ]))
    .unwrap();
    assert_eq!(config.api_base_url, "https://api.pollgen.test/v1");
    assert_eq!(config.identity_base_url, "http://localhost:9099");
}

#[test]
fn root_path_becomes_empty_prefix() {
    let config = AppConfig::from_lookup(lookup(&[(FIREBASE_API_KEY_VAR, "k"), (API_BASE_URL_VAR, "/")])).unwrap();
    assert_eq!(config.api_base_url, "");
}

#[test]
fn relative_or_schemeless_urls_are_rejected() {
    for bad in ["api", "ftp://x", "localhost:8080"] {
        let err = AppConfig::from_lookup(lookup(&[(FIREBASE_API_KEY_VAR, "k"), (API_BASE_URL_VAR, bad)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { var: API_BASE_URL_VAR, .. }), "{bad}");
        assert!(err.to_string().starts_with("POLLGEN_API_BASE_URL must be"), "{bad}");
    }
}

#[test]
fn meta_entries_round_trip_through_lookup() {
    let config = AppConfig {
        api_base_url: "https://api.test".to_owned(),
        identity_base_url: "https://id.test".to_owned(),
        firebase_api_key: "secret-but-public".to_owned(),
    };
    let entries = config.meta_entries();
    let by_meta: HashMap<&str, String> = entries.iter().cloned().collect();
    let read_back = AppConfig::from_lookup(|var| meta_name(var).and_then(|name| by_meta.get(name).cloned())).unwrap();
    assert_eq!(read_back, config);
}

#[test]
fn off_browser_document_config_is_default() {
    assert_eq!(AppConfig::from_document(), AppConfig::default());
}
