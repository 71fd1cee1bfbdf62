//! Augmentation settings, read from the environment.
//!
//! Augmentation is off unless a credential source is configured. With no
//! credential variables set, [`AugmentConfig::from_env`] returns `Ok(None)`
//! and every interpretation comes from the deterministic narrative.

use std::fmt;
use std::time::Duration;

use crate::error::BedrockError;

pub const ENV_ACCESS_KEY_ID: &str = "NIHSS_BEDROCK_ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "NIHSS_BEDROCK_SECRET_ACCESS_KEY";
pub const ENV_SESSION_TOKEN: &str = "NIHSS_BEDROCK_SESSION_TOKEN";
pub const ENV_PROFILE: &str = "NIHSS_BEDROCK_PROFILE";
pub const ENV_DEFAULT_CHAIN: &str = "NIHSS_BEDROCK_DEFAULT_CHAIN";
pub const ENV_REGION: &str = "NIHSS_BEDROCK_REGION";
pub const ENV_MODEL_ID: &str = "NIHSS_BEDROCK_MODEL_ID";
pub const ENV_TIMEOUT_SECS: &str = "NIHSS_BEDROCK_TIMEOUT_SECS";

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the Bedrock client gets its AWS credentials.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    DefaultChain,
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Inline { access_key_id, .. } => f
                .debug_struct("Inline")
                .field("access_key_id", &key_hint(access_key_id))
                .field("secret_access_key", &"<redacted>")
                .finish_non_exhaustive(),
            CredentialSource::Profile { profile_name } => f
                .debug_struct("Profile")
                .field("profile_name", profile_name)
                .finish(),
            CredentialSource::DefaultChain => f.write_str("DefaultChain"),
        }
    }
}

/// Last four characters of an access key, for logs.
fn key_hint(access_key_id: &str) -> String {
    let tail: String = access_key_id
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("...{tail}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentConfig {
    pub region: String,
    pub model_id: String,
    pub credentials: CredentialSource,
    /// Upper bound on a single model call.
    pub timeout: Duration,
}

impl AugmentConfig {
    pub fn new(credentials: CredentialSource) -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            credentials,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Option<Self>, BedrockError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. Empty values count as unset.
    ///
    /// Credential precedence: inline keys, then a named profile, then the
    /// default chain when explicitly enabled.
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, BedrockError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let credentials = if let Some(access_key_id) = get(ENV_ACCESS_KEY_ID) {
            CredentialSource::Inline {
                access_key_id,
                // A missing secret surfaces when the client is built.
                secret_access_key: get(ENV_SECRET_ACCESS_KEY).unwrap_or_default(),
                session_token: get(ENV_SESSION_TOKEN),
            }
        } else if let Some(profile_name) = get(ENV_PROFILE) {
            CredentialSource::Profile { profile_name }
        } else if get(ENV_DEFAULT_CHAIN).is_some_and(|v| is_truthy(&v)) {
            CredentialSource::DefaultChain
        } else {
            return Ok(None);
        };

        let timeout = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    BedrockError::Config(format!(
                        "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"
                    ))
                })?;
                if secs == 0 {
                    return Err(BedrockError::Config(format!(
                        "{ENV_TIMEOUT_SECS} must be greater than zero"
                    )));
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Some(AugmentConfig {
            region: get(ENV_REGION).unwrap_or_else(|| DEFAULT_REGION.to_string()),
            model_id: get(ENV_MODEL_ID).unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            credentials,
            timeout,
        }))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
