use std::collections::HashMap;
use std::time::Duration;

use nihss_bedrock::config::{
    AugmentConfig, CredentialSource, DEFAULT_MODEL_ID, DEFAULT_REGION, DEFAULT_TIMEOUT,
    ENV_ACCESS_KEY_ID, ENV_DEFAULT_CHAIN, ENV_MODEL_ID, ENV_PROFILE, ENV_REGION,
    ENV_SECRET_ACCESS_KEY, ENV_TIMEOUT_SECS,
};
use nihss_bedrock::error::BedrockError;

fn load(vars: &[(&str, &str)]) -> Result<Option<AugmentConfig>, BedrockError> {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AugmentConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn no_credentials_means_no_config() {
    assert_eq!(load(&[]).unwrap(), None);
    assert_eq!(load(&[(ENV_MODEL_ID, "some-model")]).unwrap(), None);
    assert_eq!(load(&[(ENV_ACCESS_KEY_ID, "  ")]).unwrap(), None);
    assert_eq!(load(&[(ENV_DEFAULT_CHAIN, "false")]).unwrap(), None);
}

#[test]
fn inline_credentials_with_defaults() {
    let config = load(&[
        (ENV_ACCESS_KEY_ID, "AKIAEXAMPLE"),
        (ENV_SECRET_ACCESS_KEY, "secret"),
    ])
    .unwrap()
    .unwrap();

    assert_eq!(config.region, DEFAULT_REGION);
    assert_eq!(config.model_id, DEFAULT_MODEL_ID);
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    assert_eq!(
        config.credentials,
        CredentialSource::Inline {
            access_key_id: "AKIAEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            session_token: None,
        }
    );
}

#[test]
fn inline_keys_take_precedence_over_profile() {
    let config = load(&[
        (ENV_PROFILE, "clinic"),
        (ENV_ACCESS_KEY_ID, "AKIAEXAMPLE"),
        (ENV_SECRET_ACCESS_KEY, "secret"),
    ])
    .unwrap()
    .unwrap();
    assert!(matches!(config.credentials, CredentialSource::Inline { .. }));
}

#[test]
fn profile_and_overrides() {
    let config = load(&[
        (ENV_PROFILE, "clinic"),
        (ENV_REGION, "eu-central-1"),
        (ENV_MODEL_ID, "eu.anthropic.claude-sonnet-4-20250514-v1:0"),
        (ENV_TIMEOUT_SECS, "5"),
    ])
    .unwrap()
    .unwrap();

    assert_eq!(
        config.credentials,
        CredentialSource::Profile {
            profile_name: "clinic".to_string()
        }
    );
    assert_eq!(config.region, "eu-central-1");
    assert_eq!(config.model_id, "eu.anthropic.claude-sonnet-4-20250514-v1:0");
    assert_eq!(config.timeout, Duration::from_secs(5));
}

#[test]
fn default_chain_when_enabled() {
    let config = load(&[(ENV_DEFAULT_CHAIN, "true")]).unwrap().unwrap();
    assert_eq!(config.credentials, CredentialSource::DefaultChain);
}

#[test]
fn bad_timeout_is_a_config_error() {
    for raw in ["soon", "0", "-3"] {
        let err = load(&[(ENV_DEFAULT_CHAIN, "1"), (ENV_TIMEOUT_SECS, raw)]).unwrap_err();
        assert!(matches!(err, BedrockError::Config(_)), "{raw}");
    }
}

#[test]
fn debug_output_redacts_secret() {
    let creds = CredentialSource::Inline {
        access_key_id: "AKIAEXAMPLE1234".to_string(),
        secret_access_key: "super-secret-value".to_string(),
        session_token: Some("token".to_string()),
    };
    let debug = format!("{creds:?}");
    assert!(debug.contains("...1234"));
    assert!(!debug.contains("super-secret-value"));
    assert!(!debug.contains("AKIAEXAMPLE"));
}
