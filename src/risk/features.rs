//! Per-position feature extraction.
//!
//! Derives the six-component feature vector the risk combination consumes:
//! three direct table lookups plus three context features (windowed
//! hydropathy, windowed charge density, motif proximity).

use super::tables::PropertyTables;

/// Residues on each side of position `i` included in the local window
/// (total width 5). The window clips at sequence bounds: it shrinks near
/// the ends rather than wrapping or zero-padding.
const WINDOW_RADIUS: usize = 2;

/// Distance (in residues) at which a motif occurrence's contribution
/// decays to zero.
const MOTIF_DECAY_RANGE: f64 = 5.0;

/// A located motif occurrence within a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MotifHit {
    /// Index of the occurrence center: `start + len / 2`.
    pub center: usize,
}

/// Per-position feature vector; derived, never stored beyond scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FeatureVector {
    pub hydrophobicity: f64,
    pub charge: f64,
    pub beta_propensity: f64,
    pub local_hydrophobicity: f64,
    pub charge_clustering: f64,
    pub motif_score: f64,
}

/// Locate every occurrence of every motif in one pass over the sequence.
///
/// The per-position decay sum only depends on occurrence centers, so
/// hoisting the scan out of the position loop changes nothing about the
/// resulting scores. Motifs longer than the sequence simply never match.
pub(crate) fn motif_occurrences(
    sequence: &[u8],
    tables: &PropertyTables,
) -> Vec<MotifHit> {
    let mut hits = Vec::new();
    for motif in tables.motifs() {
        let m = motif.as_bytes();
        if m.is_empty() || m.len() > sequence.len() {
            continue;
        }
        for start in 0..=(sequence.len() - m.len()) {
            if &sequence[start..start + m.len()] == m {
                hits.push(MotifHit {
                    center: start + m.len() / 2,
                });
            }
        }
    }
    hits
}

/// Extract the feature vector for position `i`.
///
/// `sequence` must already be upper-cased; `hits` are the sequence's motif
/// occurrences from [`motif_occurrences`].
pub(crate) fn extract(
    sequence: &[u8],
    i: usize,
    tables: &PropertyTables,
    hits: &[MotifHit],
) -> FeatureVector {
    let code = sequence[i];

    let lo = i.saturating_sub(WINDOW_RADIUS);
    let hi = (i + WINDOW_RADIUS + 1).min(sequence.len());
    let window = &sequence[lo..hi];

    let local_hydrophobicity = window
        .iter()
        .map(|&c| tables.hydrophobicity(c))
        .sum::<f64>()
        / window.len() as f64;

    let charge_clustering =
        window.iter().map(|&c| tables.charge(c).abs()).sum::<f64>();

    let motif_score = hits
        .iter()
        .map(|hit| {
            let distance = i.abs_diff(hit.center) as f64;
            (MOTIF_DECAY_RANGE - distance).max(0.0) / MOTIF_DECAY_RANGE
        })
        .sum::<f64>();

    FeatureVector {
        hydrophobicity: tables.hydrophobicity(code),
        charge: tables.charge(code),
        beta_propensity: tables.beta_propensity(code),
        local_hydrophobicity,
        charge_clustering,
        motif_score,
    }
}

#[cfg(test)]
mod tests {
    use super::{extract, motif_occurrences, MotifHit};
    use crate::risk::tables::PropertyTables;

    #[test]
    fn window_clips_at_sequence_start() {
        let tables = PropertyTables::standard();
        let seq = b"MDVFM";
        let fv = extract(seq, 0, &tables, &[]);
        // Position 0 averages positions [0, 2] only — M, D, V
        let expected = (1.9 - 3.5 + 4.2) / 3.0;
        assert!((fv.local_hydrophobicity - expected).abs() < 1e-12);
    }

    #[test]
    fn window_clips_at_sequence_end() {
        let tables = PropertyTables::standard();
        let seq = b"MDVFM";
        let fv = extract(seq, 4, &tables, &[]);
        // Last position averages positions [2, 4] — V, F, M
        let expected = (4.2 + 2.8 + 1.9) / 3.0;
        assert!((fv.local_hydrophobicity - expected).abs() < 1e-12);
    }

    #[test]
    fn charge_clustering_sums_absolute_values() {
        let tables = PropertyTables::standard();
        // D (-1), K (+1), H (+0.5) in one window: |sum| would cancel,
        // the density measure must not.
        let seq = b"DKHAA";
        let fv = extract(seq, 1, &tables, &[]);
        assert!((fv.charge_clustering - 2.5).abs() < 1e-12);
    }

    #[test]
    fn motif_center_gets_full_weight() {
        let tables = PropertyTables::standard();
        let seq = b"AAAAAKTKEAAAAA";
        let hits = motif_occurrences(seq, &tables);
        // KTKE occurs at 5, center 5 + 4/2 = 7
        assert!(hits.contains(&MotifHit { center: 7 }));
        let fv = extract(seq, 7, &tables, &[MotifHit { center: 7 }]);
        assert_eq!(fv.motif_score, 1.0);
    }

    #[test]
    fn motif_contribution_decays_linearly_to_zero() {
        let tables = PropertyTables::standard();
        let seq = b"AAAAAKTKEAAAAA";
        let hits = [MotifHit { center: 7 }];
        let at = |i: usize| extract(seq, i, &tables, &hits).motif_score;
        assert!((at(3) - 0.2).abs() < 1e-12); // distance 4
        assert_eq!(at(2), 0.0); // distance 5
        assert_eq!(at(12), 0.0); // distance 5, other side
        assert_eq!(at(13), 0.0); // beyond
    }

    #[test]
    fn overlapping_occurrences_accumulate() {
        let tables = PropertyTables::standard();
        // KTKEGV contains KTKE, KEGV and KTKEGV itself: three hits with
        // centers 2, 4 and 3.
        let seq = b"KTKEGV";
        let hits = motif_occurrences(seq, &tables);
        assert_eq!(hits.len(), 3);
        let fv = extract(seq, 3, &tables, &hits);
        // distances 1, 1, 0 → 0.8 + 0.8 + 1.0
        assert!((fv.motif_score - 2.6).abs() < 1e-12);
    }

    #[test]
    fn sequence_shorter_than_motif_contributes_nothing() {
        let tables = PropertyTables::standard();
        let hits = motif_occurrences(b"KT", &tables);
        assert!(hits.is_empty());
    }
}
