//! The scoring engine: clamped scores in, total/tier/narrative out.

use nihss_core::models::assessment::AssessmentResult;
use nihss_core::models::score_set::ScoreSet;
use nihss_core::models::severity::{SEVERITY_BANDS, SeverityTier};

use crate::interpretation::interpret;

/// Score one assessment.
///
/// Values in `scores` are already clamped, so this cannot fail. Identical
/// input always yields an identical result.
pub fn evaluate(scores: &ScoreSet) -> AssessmentResult {
    let total = scores.total();
    let severity = classify(total);
    AssessmentResult {
        total_score: total,
        severity,
        interpretation: interpret(scores, total, severity),
    }
}

/// Map a total score to its severity tier.
///
/// Scans the bands in ascending order and takes the first that contains
/// `total`. Anything past the last band is `Severe`.
pub fn classify(total: u8) -> SeverityTier {
    SEVERITY_BANDS
        .iter()
        .find(|band| band.contains(total))
        .map(|band| band.tier)
        .unwrap_or(SeverityTier::Severe)
}
