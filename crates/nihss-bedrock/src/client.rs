//! Bedrock-backed [`TextGenerator`].

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::{debug, info};

use crate::config::{AugmentConfig, CredentialSource};
use crate::error::BedrockError;
use crate::generator::{Connect, TextGenerator};

/// Build an `SdkConfig` from a region and credential source.
pub async fn build_sdk_config(region: &str, creds: &CredentialSource) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    match creds {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            builder = builder.credentials_provider(
                aws_sdk_bedrockruntime::config::Credentials::new(
                    access_key_id,
                    secret_access_key,
                    session_token.clone(),
                    None,
                    "nihss-config",
                ),
            );
        }
        CredentialSource::Profile { profile_name } => {
            builder = builder.profile_name(profile_name);
        }
        CredentialSource::DefaultChain => {}
    }

    builder.load().await
}

/// Builds a [`BedrockGenerator`] from an [`AugmentConfig`].
#[derive(Debug, Clone)]
pub struct BedrockConnector {
    config: AugmentConfig,
}

impl BedrockConnector {
    pub fn new(config: AugmentConfig) -> Self {
        Self { config }
    }

    fn check(&self) -> Result<(), BedrockError> {
        if self.config.model_id.trim().is_empty() {
            return Err(BedrockError::Config("model id is empty".to_string()));
        }
        if self.config.region.trim().is_empty() {
            return Err(BedrockError::Config("region is empty".to_string()));
        }
        if let CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            ..
        } = &self.config.credentials
            && (access_key_id.trim().is_empty() || secret_access_key.trim().is_empty())
        {
            return Err(BedrockError::Config(
                "inline credentials need both an access key id and a secret access key"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

impl Connect for BedrockConnector {
    type Generator = BedrockGenerator;

    async fn connect(&self) -> Result<BedrockGenerator, BedrockError> {
        self.check()?;
        let sdk_config = build_sdk_config(&self.config.region, &self.config.credentials).await;
        info!(
            region = %self.config.region,
            model = %self.config.model_id,
            "bedrock client configured"
        );
        Ok(BedrockGenerator {
            client: Client::new(&sdk_config),
            model_id: self.config.model_id.clone(),
        })
    }
}

/// Single-turn Converse calls against one model.
#[derive(Debug, Clone)]
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
}

impl TextGenerator for BedrockGenerator {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, BedrockError> {
        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_string()))
            .messages(
                Message::builder()
                    .role(ConversationRole::User)
                    .content(ContentBlock::Text(user_message.to_string()))
                    .build()
                    .map_err(|e| BedrockError::Invocation(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if let Some(usage) = response.usage() {
            debug!(
                model = %self.model_id,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "converse token usage"
            );
        }

        Ok(text)
    }
}
