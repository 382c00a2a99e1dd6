//! Weighted risk combination and the public scoring operations.

use super::color::RiskLevel;
use super::features::{self, FeatureVector};
use super::regions::{self, Region};
use super::tables::PropertyTables;

// Hand-tuned combination weights. Not fitted; callers depend on these
// exact coefficients and on clamping after summation, not per-term.
const HYDRO_WEIGHT: f64 = 10.0;
const BETA_WEIGHT: f64 = 15.0;
const CLUSTER_WEIGHT: f64 = 8.0;
const CHARGE_WEIGHT: f64 = 5.0;
const CHARGE_NEUTRAL_CEILING: f64 = 3.0;
const MOTIF_WEIGHT: f64 = 25.0;

/// Per-residue aggregation-risk scorer.
///
/// A pure function over the input sequence and the injected
/// [`PropertyTables`]: no I/O, no mutable state, safe to share across
/// threads. Identical sequence and threshold always produce identical
/// output, so results are memoizable by the caller.
#[derive(Debug, Clone, Default)]
pub struct AggregationScorer {
    tables: PropertyTables,
}

impl AggregationScorer {
    /// Build a scorer around an injected table set.
    #[must_use]
    pub fn new(tables: PropertyTables) -> Self {
        Self { tables }
    }

    /// Build a scorer with the standard table set.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(PropertyTables::standard())
    }

    /// Compute one risk score in [0, 100] per sequence position.
    ///
    /// The sequence is upper-cased before lookup; unrecognized codes are
    /// neutral. An empty sequence yields an empty vector.
    #[must_use]
    pub fn compute_risk_scores(&self, sequence: &str) -> Vec<f64> {
        let seq = sequence.to_ascii_uppercase().into_bytes();
        let hits = features::motif_occurrences(&seq, &self.tables);

        (0..seq.len())
            .map(|i| {
                combine(&features::extract(&seq, i, &self.tables, &hits))
            })
            .collect()
    }

    /// Find maximal contiguous regions whose scores all meet or exceed
    /// `threshold`, 0-indexed into the sequence, in ascending order.
    #[must_use]
    pub fn find_high_risk_regions(
        &self,
        sequence: &str,
        threshold: f64,
    ) -> Vec<Region> {
        regions::segment(&self.compute_risk_scores(sequence), threshold)
    }

    /// Map each score to its color bucket. Same length as the input.
    #[must_use]
    pub fn color_for_scores(scores: &[f64]) -> Vec<RiskLevel> {
        scores.iter().map(|&s| RiskLevel::from_score(s)).collect()
    }
}

/// Combine a feature vector into a single score in [0, 100].
///
/// Hydrophobic, beta-prone, locally-hydrophobic, charge-neutral and
/// motif-proximal residues each independently raise risk. The clamp
/// applies to the sum, never to individual terms.
fn combine(fv: &FeatureVector) -> f64 {
    let hydro_risk = fv.hydrophobicity.max(0.0) * HYDRO_WEIGHT;
    let beta_risk = fv.beta_propensity * BETA_WEIGHT;
    let cluster_risk = fv.local_hydrophobicity.max(0.0) * CLUSTER_WEIGHT;
    let charge_risk =
        (CHARGE_NEUTRAL_CEILING - fv.charge_clustering).max(0.0) * CHARGE_WEIGHT;
    let motif_risk = fv.motif_score * MOTIF_WEIGHT;

    (hydro_risk + beta_risk + cluster_risk + charge_risk + motif_risk)
        .clamp(0.0, 100.0)
}
