use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Stroke severity derived from the NIHSS total, ordered least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityTier {
    NoStroke,
    Minor,
    Moderate,
    ModerateSevere,
    Severe,
}

/// Closed, contiguous total-score band for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityBand {
    pub low: u8,
    pub high: u8,
    pub tier: SeverityTier,
}

impl SeverityBand {
    pub fn contains(&self, total: u8) -> bool {
        self.low <= total && total <= self.high
    }
}

/// Tier bands in ascending order. Together they cover `0..=42` with no gaps.
pub const SEVERITY_BANDS: [SeverityBand; 5] = [
    SeverityBand { low: 0, high: 0, tier: SeverityTier::NoStroke },
    SeverityBand { low: 1, high: 4, tier: SeverityTier::Minor },
    SeverityBand { low: 5, high: 15, tier: SeverityTier::Moderate },
    SeverityBand { low: 16, high: 20, tier: SeverityTier::ModerateSevere },
    SeverityBand { low: 21, high: 42, tier: SeverityTier::Severe },
];

impl SeverityTier {
    pub const ALL: [SeverityTier; 5] = [
        SeverityTier::NoStroke,
        SeverityTier::Minor,
        SeverityTier::Moderate,
        SeverityTier::ModerateSevere,
        SeverityTier::Severe,
    ];

    /// Stable identifier, matching the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            SeverityTier::NoStroke => "no_stroke",
            SeverityTier::Minor => "minor",
            SeverityTier::Moderate => "moderate",
            SeverityTier::ModerateSevere => "moderate_severe",
            SeverityTier::Severe => "severe",
        }
    }

    /// Display label. Callers pass this through unchanged.
    pub fn label(self) -> &'static str {
        match self {
            SeverityTier::NoStroke => "No stroke symptoms",
            SeverityTier::Minor => "Minor stroke",
            SeverityTier::Moderate => "Moderate stroke",
            SeverityTier::ModerateSevere => "Moderate to severe stroke",
            SeverityTier::Severe => "Severe stroke",
        }
    }

    /// The total-score band this tier covers.
    pub fn band(self) -> SeverityBand {
        SEVERITY_BANDS[self as usize]
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
