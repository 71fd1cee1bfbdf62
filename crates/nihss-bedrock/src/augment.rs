//! Generated interpretations with deterministic fallback.
//!
//! [`Augmenter::augment`] always returns usable text. The client is built
//! lazily on first use and memoised for the life of the augmenter:
//!
//! - no connector: every call returns the deterministic narrative
//! - connector fails: logged once, then every call falls back
//! - client ready: each call tries the model; a failed or timed-out call
//!   falls back for that call only and the client stays in service

use std::time::Duration;

use tokio::sync::OnceCell;
use tracing::{error, info, warn};
use uuid::Uuid;

use nihss_core::models::assessment::AssessmentResult;
use nihss_core::models::request::{AssessmentRequest, PatientContext};
use nihss_core::models::score_set::ScoreSet;
use nihss_core::models::severity::SeverityTier;
use nihss_instruments::{evaluate, interpret};

use crate::client::BedrockConnector;
use crate::config::{AugmentConfig, DEFAULT_TIMEOUT};
use crate::error::BedrockError;
use crate::generator::{Connect, TextGenerator};
use crate::prompt::{SYSTEM_PROMPT, build_prompt};

pub struct Augmenter<C: Connect> {
    connector: Option<C>,
    client: OnceCell<Option<C::Generator>>,
    timeout: Duration,
}

impl Augmenter<BedrockConnector> {
    /// Bedrock-backed augmenter, or a disabled one when `config` is `None`.
    pub fn from_config(config: Option<AugmentConfig>) -> Self {
        match config {
            Some(config) => {
                let timeout = config.timeout;
                Self::new(BedrockConnector::new(config), timeout)
            }
            None => {
                info!("no bedrock credentials configured, generated interpretations disabled");
                Self::disabled()
            }
        }
    }
}

impl<C: Connect> Augmenter<C> {
    pub fn new(connector: C, timeout: Duration) -> Self {
        Self {
            connector: Some(connector),
            client: OnceCell::new(),
            timeout,
        }
    }

    /// An augmenter that always returns the deterministic narrative.
    pub fn disabled() -> Self {
        Self {
            connector: None,
            client: OnceCell::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.connector.is_some()
    }

    /// Interpretation text for an already-scored assessment.
    ///
    /// Never fails: any problem with the generator yields
    /// `interpret(scores, total, severity)`.
    pub async fn augment(
        &self,
        scores: &ScoreSet,
        total: u8,
        severity: SeverityTier,
        patient: &PatientContext,
    ) -> String {
        let Some(client) = self.client().await else {
            return interpret(scores, total, severity);
        };

        let transaction_id = Uuid::new_v4();
        info!(
            transaction_id = %transaction_id,
            total,
            severity = %severity,
            "requesting generated interpretation"
        );

        let prompt = build_prompt(scores, total, severity, patient);
        match self.generate(client, &prompt).await {
            Ok(text) => {
                info!(
                    transaction_id = %transaction_id,
                    text_len = text.len(),
                    "generated interpretation complete"
                );
                text
            }
            Err(e) => {
                warn!(
                    transaction_id = %transaction_id,
                    error = %e,
                    "generated interpretation failed, using deterministic text"
                );
                interpret(scores, total, severity)
            }
        }
    }

    /// Score `request` and attach the best available interpretation.
    pub async fn evaluate(&self, request: &AssessmentRequest) -> AssessmentResult {
        let scored = evaluate(&request.scores);
        let interpretation = self
            .augment(
                &request.scores,
                scored.total_score,
                scored.severity,
                &request.patient,
            )
            .await;
        AssessmentResult {
            interpretation,
            ..scored
        }
    }

    async fn client(&self) -> Option<&C::Generator> {
        let connector = self.connector.as_ref()?;
        self.client
            .get_or_init(|| async {
                match connector.connect().await {
                    Ok(client) => Some(client),
                    Err(e) => {
                        error!(
                            error = %e,
                            "failed to initialize text generation client, \
                             generated interpretations disabled"
                        );
                        None
                    }
                }
            })
            .await
            .as_ref()
    }

    async fn generate(&self, client: &C::Generator, prompt: &str) -> Result<String, BedrockError> {
        let text = tokio::time::timeout(self.timeout, client.generate(SYSTEM_PROMPT, prompt))
            .await
            .map_err(|_| BedrockError::Timeout(self.timeout))??;

        let text = text.trim();
        if text.is_empty() {
            return Err(BedrockError::ResponseParse("model returned no text".to_string()));
        }
        Ok(text.to_string())
    }
}
