//! Seams between the augmenter and a concrete text-generation service.

use std::future::Future;

use crate::error::BedrockError;

/// Something that turns a prompt into text.
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> impl Future<Output = Result<String, BedrockError>> + Send;
}

/// Builds a [`TextGenerator`]. Called at most once per augmenter.
pub trait Connect: Send + Sync {
    type Generator: TextGenerator;

    fn connect(&self) -> impl Future<Output = Result<Self::Generator, BedrockError>> + Send;
}
