//! Known familial Parkinson's disease mutations of α-synuclein.
//!
//! Display-only annotation data passed through to the viewer; the risk
//! scorer never consumes it. Positions are 1-indexed residue numbers, the
//! convention the 3D renderer expects.

/// A named point mutation with its residue position and a short
/// description for the info panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    /// Mutation name in wild-type/position/variant form, e.g. `A53T`.
    pub name: &'static str,
    /// 1-indexed residue position in the reference sequence.
    pub position: u32,
    /// One-line clinical note.
    pub description: &'static str,
}

/// Familial Parkinson's mutations highlighted by the viewer.
pub const PARKINSONS_MUTATIONS: [Mutation; 5] = [
    Mutation {
        name: "A53T",
        position: 53,
        description: "Most common familial mutation",
    },
    Mutation {
        name: "A30P",
        position: 30,
        description: "Associated with early onset",
    },
    Mutation {
        name: "E46K",
        position: 46,
        description: "Linked to dementia",
    },
    Mutation {
        name: "H50Q",
        position: 50,
        description: "Rare familial variant",
    },
    Mutation {
        name: "G51D",
        position: 51,
        description: "Recently discovered",
    },
];

/// Look up a mutation by name (case-insensitive).
#[must_use]
pub fn find(name: &str) -> Option<&'static Mutation> {
    PARKINSONS_MUTATIONS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::{find, PARKINSONS_MUTATIONS};
    use crate::sequence::ALPHA_SYNUCLEIN;

    #[test]
    fn lookup_by_name() {
        assert_eq!(find("A53T").map(|m| m.position), Some(53));
        assert_eq!(find("e46k").map(|m| m.position), Some(46));
        assert!(find("A99X").is_none());
    }

    #[test]
    fn names_encode_wild_type_and_position() {
        // The wild-type residue named by each mutation must match the
        // reference sequence at its 1-indexed position.
        for m in &PARKINSONS_MUTATIONS {
            let wild_type = m.name.as_bytes()[0];
            let at = ALPHA_SYNUCLEIN.as_bytes()[(m.position - 1) as usize];
            assert_eq!(wild_type, at, "{} vs sequence", m.name);

            let digits: String = m
                .name
                .chars()
                .filter(char::is_ascii_digit)
                .collect();
            assert_eq!(digits.parse::<u32>().ok(), Some(m.position));
        }
    }
}
