//! Verify construction and URL building against JSON test vectors stored in
//! `test-vectors/`.
//!
//! The environment cases run against `FixedEnvironment`, so they never touch
//! the process environment. Results are compared field by field because an
//! environment-built config may hold values that deserialization rejects.

use integresql_core::{ClientConfig, FixedEnvironment};

fn vectors() -> serde_json::Value {
    let raw = include_str!("../../test-vectors/config.json");
    serde_json::from_str(raw).unwrap()
}

fn assert_fields(config: &ClientConfig, expected: &serde_json::Value, name: &str) {
    assert_eq!(config.base_url(), expected["baseUrl"].as_str().unwrap(), "{name}: baseUrl");
    assert_eq!(config.api_version(), expected["apiVersion"].as_str().unwrap(), "{name}: apiVersion");
}

#[test]
fn custom_test_vectors() {
    for case in vectors()["custom"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let base_url = case["input"]["base_url"].as_str().unwrap();
        let api_version = case["input"]["api_version"].as_str().unwrap();

        let result = ClientConfig::custom(base_url, api_version);
        match case.get("expected_error") {
            Some(message) => {
                let err = result.expect_err(name);
                assert_eq!(err.to_string(), message.as_str().unwrap(), "{name}: error");
            }
            None => {
                let config = result.unwrap_or_else(|e| panic!("{name}: {e}"));
                assert_fields(&config, &case["expected"], name);
                assert_eq!(serde_json::to_value(&config).unwrap(), case["expected"], "{name}: json");
            }
        }
    }
}

#[test]
fn environment_test_vectors() {
    for case in vectors()["environment"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let env: FixedEnvironment = case["variables"]
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.as_str().unwrap().to_string()))
            .collect();

        let config = ClientConfig::from_environment(&env);
        assert_fields(&config, &case["expected"], name);
    }
}

#[test]
fn endpoint_test_vectors() {
    for case in vectors()["endpoint"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let config = ClientConfig::custom(
            case["base_url"].as_str().unwrap(),
            case["api_version"].as_str().unwrap(),
        )
        .unwrap_or_else(|e| panic!("{name}: {e}"));
        let expected = case["expected"].as_str().unwrap();
        assert_eq!(config.endpoint(case["path"].as_str().unwrap()), expected, "{name}: url");
    }
}
