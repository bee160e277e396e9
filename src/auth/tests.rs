//! Tests for the auth module

use super::*;

#[test]
fn test_auth_config_default() {
    let config = AuthConfig::default();
    assert_eq!(config, AuthConfig::None);
    assert!(!config.is_authenticated());
}

#[test]
fn test_bearer_is_authenticated() {
    assert!(AuthConfig::bearer("ghp_abc").is_authenticated());
    assert!(!AuthConfig::bearer("").is_authenticated());
}

#[test]
fn test_debug_redacts_token() {
    let config = AuthConfig::bearer("ghp_secret_value");
    let debug = format!("{config:?}");
    assert!(!debug.contains("ghp_secret_value"));
    assert!(debug.contains("<redacted>"));

    let auth = Authenticator::new(config);
    assert!(!format!("{auth:?}").contains("ghp_secret_value"));
}

#[test]
fn test_apply_bearer_header() {
    let auth = Authenticator::new(AuthConfig::bearer("test-token"));
    let client = reqwest::Client::new();
    let request = auth
        .apply(client.post("https://api.example.com/graphql"))
        .build()
        .unwrap();

    assert_eq!(
        request.headers().get("authorization").unwrap(),
        "Bearer test-token"
    );
}

#[test]
fn test_apply_none_adds_nothing() {
    let auth = Authenticator::default();
    let client = reqwest::Client::new();
    let request = auth
        .apply(client.post("https://api.example.com/graphql"))
        .build()
        .unwrap();

    assert!(request.headers().get("authorization").is_none());
}
