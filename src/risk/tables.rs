//! Immutable per-residue property tables backing the risk scorer.
//!
//! Built once (typically at process start) and injected into
//! [`AggregationScorer`](super::AggregationScorer) rather than read from
//! ambient globals. Lookups on unrecognized codes fall back to a neutral
//! 0.0 so malformed sequences degrade instead of erroring.

use rustc_hash::FxHashMap;

/// Kyte-Doolittle (1982) hydropathy values per single-letter code.
const HYDROPHOBICITY: [(u8, f64); 20] = [
    (b'A', 1.8),
    (b'C', 2.5),
    (b'D', -3.5),
    (b'E', -3.5),
    (b'F', 2.8),
    (b'G', -0.4),
    (b'H', -3.2),
    (b'I', 4.5),
    (b'K', -3.9),
    (b'L', 3.8),
    (b'M', 1.9),
    (b'N', -3.5),
    (b'P', -1.6),
    (b'Q', -3.5),
    (b'R', -4.5),
    (b'S', -0.8),
    (b'T', -0.7),
    (b'V', 4.2),
    (b'W', -0.9),
    (b'Y', -1.3),
];

/// Net sidechain charge at physiological pH. Histidine is kept at its
/// fractional +0.5; only the absolute value is consumed downstream, so the
/// sign and fraction have no further behavioral effect.
const CHARGE: [(u8, f64); 5] = [
    (b'D', -1.0),
    (b'E', -1.0),
    (b'K', 1.0),
    (b'R', 1.0),
    (b'H', 0.5),
];

/// Chou-Fasman beta-sheet conformational propensities (P_beta / 100).
const BETA_PROPENSITY: [(u8, f64); 20] = [
    (b'A', 0.83),
    (b'C', 1.19),
    (b'D', 0.54),
    (b'E', 0.37),
    (b'F', 1.38),
    (b'G', 0.75),
    (b'H', 0.87),
    (b'I', 1.60),
    (b'K', 0.74),
    (b'L', 1.30),
    (b'M', 1.05),
    (b'N', 0.89),
    (b'P', 0.55),
    (b'Q', 1.10),
    (b'R', 0.93),
    (b'S', 0.75),
    (b'T', 1.19),
    (b'V', 1.70),
    (b'W', 1.37),
    (b'Y', 1.47),
];

/// Aggregation-associated sequence motifs: tiles of the α-synuclein KTKEGV
/// imperfect repeat plus NAC-region fragments.
const AGGREGATION_MOTIFS: [&str; 5] = ["KTKE", "KEGV", "KTKEGV", "GAV", "VTGV"];

/// Immutable residue property tables used by the scorer.
///
/// Constructed via [`PropertyTables::standard`] and never mutated; the
/// scorer holds a table set per instance, so multiple scorers with
/// different tables can coexist.
#[derive(Debug, Clone)]
pub struct PropertyTables {
    hydrophobicity: FxHashMap<u8, f64>,
    charge: FxHashMap<u8, f64>,
    beta_propensity: FxHashMap<u8, f64>,
    motifs: Vec<&'static str>,
}

impl PropertyTables {
    /// Build the standard table set (Kyte-Doolittle hydropathy,
    /// Chou-Fasman beta propensity, physiological charges, KTKEGV-repeat
    /// motifs).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            hydrophobicity: HYDROPHOBICITY.iter().copied().collect(),
            charge: CHARGE.iter().copied().collect(),
            beta_propensity: BETA_PROPENSITY.iter().copied().collect(),
            motifs: AGGREGATION_MOTIFS.to_vec(),
        }
    }

    /// Hydropathy of a residue code. Unrecognized codes are neutral (0.0).
    #[must_use]
    pub fn hydrophobicity(&self, code: u8) -> f64 {
        self.hydrophobicity.get(&code).copied().unwrap_or(0.0)
    }

    /// Net charge of a residue code. Unrecognized codes are neutral (0.0).
    #[must_use]
    pub fn charge(&self, code: u8) -> f64 {
        self.charge.get(&code).copied().unwrap_or(0.0)
    }

    /// Beta-sheet propensity of a residue code. Unrecognized codes are
    /// neutral (0.0).
    #[must_use]
    pub fn beta_propensity(&self, code: u8) -> f64 {
        self.beta_propensity.get(&code).copied().unwrap_or(0.0)
    }

    /// The aggregation-associated motif substrings.
    #[must_use]
    pub fn motifs(&self) -> &[&'static str] {
        &self.motifs
    }
}

impl Default for PropertyTables {
    fn default() -> Self {
        Self::standard()
    }
}
