use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::SeverityTier;

/// Outcome of scoring one NIHSS assessment.
///
/// A pure function of the score set it was computed from. Recompute it when
/// the scores change rather than editing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub total_score: u8,
    pub severity: SeverityTier,
    pub interpretation: String,
}

impl AssessmentResult {
    pub fn severity_display(&self) -> &'static str {
        self.severity.label()
    }
}
