//! Reference protein sequences and normalization helpers.

/// Canonical human α-synuclein sequence (UniProt P37840, 140 residues).
///
/// Residue numbering in the mutation table and viewer annotations is
/// 1-indexed into this sequence.
pub const ALPHA_SYNUCLEIN: &str = "MDVFMKGLSKAKEGVVAAAEKTKQGVAEAAGKTKEGVLYV\
GSKTKEGVVHGVATVAEKTKEQVTNVGGAVVTGVTAVAQKTVEGAGSIAAATGFVKKDQLGKNEEGAPQEGI\
LEDMPVDPDNEAYEMPSEEGYQDYEPEA";

/// Uppercase a sequence for property-table lookup.
///
/// Unrecognized codes are kept as-is; the property tables treat them as
/// neutral rather than rejecting the sequence.
#[must_use]
pub fn normalize(sequence: &str) -> String {
    sequence.to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::{normalize, ALPHA_SYNUCLEIN};

    #[test]
    fn reference_sequence_is_140_residues() {
        assert_eq!(ALPHA_SYNUCLEIN.len(), 140);
        assert!(ALPHA_SYNUCLEIN.starts_with("MDVFMKGLSK"));
        assert!(ALPHA_SYNUCLEIN.ends_with("YEPEA"));
    }

    #[test]
    fn reference_sequence_contains_repeat_motif() {
        // The KTKEGV imperfect repeat the risk tables key on.
        assert!(ALPHA_SYNUCLEIN.contains("KTKEGV"));
    }

    #[test]
    fn normalize_uppercases_without_filtering() {
        assert_eq!(normalize("mdvF"), "MDVF");
        assert_eq!(normalize("mXz"), "MXZ");
    }
}
