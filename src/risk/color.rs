//! Score-to-color bucketing for the risk overlay.

use serde::{Deserialize, Serialize};

/// Risk bucket for a residue, ordered low → very high.
///
/// Breakpoints are fixed: [0,20) low, [20,40) moderate, [40,60) elevated,
/// [60,80) high, [80,100] very high. The mapping is a non-decreasing step
/// function of the score, and the renderer contract depends on exactly
/// these five buckets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Score in [0, 20).
    Low,
    /// Score in [20, 40).
    Moderate,
    /// Score in [40, 60).
    Elevated,
    /// Score in [60, 80).
    High,
    /// Score in [80, 100].
    VeryHigh,
}

impl RiskLevel {
    /// Bucket a score using the fixed breakpoints.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 20.0 {
            Self::Low
        } else if score < 40.0 {
            Self::Moderate
        } else if score < 60.0 {
            Self::Elevated
        } else if score < 80.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Display color for this bucket (RGB hex, as 3Dmol.js accepts).
    #[must_use]
    pub fn hex_color(&self) -> &'static str {
        match self {
            Self::Low => "#2b83ba",      // blue
            Self::Moderate => "#abdda4", // green
            Self::Elevated => "#ffffbf", // yellow
            Self::High => "#fdae61",     // orange
            Self::VeryHigh => "#d7191c", // red
        }
    }

    /// Short human-readable label for legends and tooltips.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Elevated => "elevated",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }
}
