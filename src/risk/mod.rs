//! Per-residue aggregation-risk scoring.
//!
//! A deterministic, explainable heuristic over fixed per-amino-acid
//! property tables — not a validated biophysical predictor. The pipeline
//! is one cohesive pass: feature extraction → weighted combination →
//! threshold segmentation → color bucketing.

mod color;
mod features;
mod regions;
mod scorer;
mod tables;

pub use color::RiskLevel;
pub use regions::{segment, Region};
pub use scorer::AggregationScorer;
pub use tables::PropertyTables;
