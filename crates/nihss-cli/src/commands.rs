use std::path::PathBuf;

use eyre::WrapErr;
use serde::Serialize;
use tokio::io::AsyncReadExt;

use nihss_bedrock::augment::Augmenter;
use nihss_bedrock::config::AugmentConfig;
use nihss_core::models::assessment::AssessmentResult;
use nihss_core::models::request::AssessmentRequest;
use nihss_core::models::severity::SeverityTier;
use nihss_instruments::error::InstrumentError;
use nihss_instruments::instruments::nihss::Nihss;
use nihss_instruments::scoring::Domain;
use nihss_instruments::{Instrument, all_instruments, evaluate as score, get_instrument};

/// Printed result of `nihss evaluate`.
#[derive(Debug, Serialize)]
pub struct EvaluationOutput {
    pub total_score: u8,
    pub severity: SeverityTier,
    pub severity_display: &'static str,
    pub interpretation: String,
}

impl From<AssessmentResult> for EvaluationOutput {
    fn from(result: AssessmentResult) -> Self {
        Self {
            total_score: result.total_score,
            severity: result.severity,
            severity_display: result.severity_display(),
            interpretation: result.interpretation,
        }
    }
}

#[derive(Serialize)]
struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
struct InstrumentDetail {
    id: String,
    name: String,
    domains: Vec<Domain>,
}

pub async fn evaluate(input: Option<PathBuf>, augment: bool, strict: bool) -> eyre::Result<()> {
    let payload = read_payload(input).await?;
    let request = prepare(&payload, strict)?;

    let result = if augment {
        let augmenter = Augmenter::from_config(AugmentConfig::from_env()?);
        augmenter.evaluate(&request).await
    } else {
        score(&request.scores)
    };

    tracing::info!(
        total_score = result.total_score,
        severity = %result.severity,
        "assessment scored"
    );

    let output = EvaluationOutput::from(result);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Coerce a payload and, in strict mode, reject item scores outside their range.
///
/// Strict failures surface as [`InstrumentError`] inside the report.
pub fn prepare(payload: &str, strict: bool) -> eyre::Result<AssessmentRequest> {
    let request = AssessmentRequest::from_json_str(payload)?;

    if strict {
        let errors = Nihss.validate_scores(&Nihss::entries(&request.raw_scores));
        if let Some(err) = InstrumentError::from_validation(errors) {
            return Err(err.into());
        }
    }

    Ok(request)
}

pub fn list_instruments() -> eyre::Result<()> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&instruments)?);
    Ok(())
}

pub fn show_instrument(id: &str) -> eyre::Result<()> {
    let instrument =
        get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))?;

    let detail = InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        domains: instrument.domains().to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}

async fn read_payload(input: Option<PathBuf>) -> eyre::Result<String> {
    match input {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .wrap_err("failed to read payload from stdin")?;
            Ok(buf)
        }
    }
}
