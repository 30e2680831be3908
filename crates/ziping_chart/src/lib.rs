//! Four-pillar chart model, builder, strength evaluation, and pattern
//! classification.
//!
//! This crate provides:
//! - `Pillar`/`Chart`, the immutable four-pillar representation
//! - `resolve_chart`: civil instant → chart, with solar-term year/month
//!   boundaries and the true-solar-time correction
//! - `evaluate`: weighted support-vs-pressure strength of the Day Master
//! - `classify`: the priority-ordered structural pattern cascade

pub mod builder;
pub mod error;
pub mod pattern;
pub mod pillar;
pub mod strength;

pub use builder::{ZiHourPolicy, resolve_chart};
pub use error::ChartError;
pub use pattern::{
    PatternEvidence, PatternResult, PatternStructure, PurityLevel, SupportEvidence, Verdict,
    classify, verdict_from,
};
pub use pillar::{ALL_POSITIONS, Chart, Pillar, PillarPosition};
pub use strength::{
    ElementDistribution, STRENGTH_THRESHOLDS, StrengthLevel, StrengthReport, element_distribution,
    evaluate, strength_from_distribution,
};
