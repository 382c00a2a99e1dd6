// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! α-synuclein 3D structure viewer with aggregation-risk overlays.
//!
//! Synview fetches α-synuclein structures from RCSB, computes a per-residue
//! heuristic aggregation-risk score, and emits a self-contained HTML page
//! that drives 3Dmol.js with risk-colored residues and Parkinson's disease
//! mutation labels.
//!
//! # Key entry points
//!
//! - [`risk::AggregationScorer`] - the per-residue risk scoring pipeline
//! - [`viewer::ViewerPage`] - 3Dmol.js page templating
//! - [`options::Options`] - runtime configuration (structure, style, risk
//!   threshold)
//! - [`mutations`] - known familial Parkinson's mutation annotations
//!
//! # Architecture
//!
//! The scorer is a pure function over an input sequence and immutable
//! property tables: feature extraction → weighted combination →
//! threshold segmentation → color bucketing. It performs no I/O and holds
//! no mutable state, so concurrent callers need no synchronization and
//! identical inputs always produce identical output. Structure download
//! and 3D rendering are external collaborators: RCSB supplies the
//! structure payload (behind the `fetch` feature) and 3Dmol.js consumes
//! per-residue `(position, color, label)` directives from the templated
//! page.

pub mod error;
pub mod mutations;
pub mod options;
pub mod risk;
pub mod sequence;
pub mod structure;
pub mod viewer;
