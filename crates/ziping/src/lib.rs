//! High-level façade over the four-pillars engine.
//!
//! Provides request types, the full `Analyzer` pipeline (chart → strength →
//! pattern → fortune periods), an injectable bounded result cache, and flat
//! versioned serialization records.
//!
//! # Quick start
//!
//! ```rust
//! use ziping::{Analyzer, ChartRequest, Gender};
//! use ziping::CivilDateTime;
//!
//! let analyzer = Analyzer::new();
//! let request = ChartRequest::new(
//!     CivilDateTime::new(2000, 6, 10, 12, 0, 0.0),
//!     Gender::Male,
//! );
//! let analysis = analyzer.analyze(&request).unwrap();
//! println!("{} → {}", analysis.chart, analysis.pattern.structure.name());
//! ```

pub mod analyze;
pub mod cache;
pub mod error;
pub mod records;
pub mod request;

pub use analyze::{Analysis, Analyzer};
pub use cache::{AnalysisCache, CacheKey, LruAnalysisCache, NoopCache};
pub use error::ZipingError;
pub use records::{
    AnalysisRecord, ChartRecord, FortunePeriodRecord, FortuneRecord, PatternRecord, PillarRecord,
    SCHEMA_VERSION, StrengthRecord,
};
pub use request::{ChartRequest, FortunePeriodRequest};

// Re-export the stack so callers only need `use ziping::*`.
pub use ziping_base::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, ALL_TEN_GODS, Branch, HiddenComponent, Stem, TenGod,
    TenGodGroup, WuXing, YinYang, relate, relate_elements,
};
pub use ziping_chart::{
    Chart, ChartError, PatternResult, PatternStructure, Pillar, PillarPosition, PurityLevel,
    StrengthLevel, StrengthReport, SupportEvidence, Verdict, ZiHourPolicy, classify, evaluate,
    resolve_chart,
};
pub use ziping_fortune::{
    DEFAULT_PERIOD_COUNT, FortuneDirection, FortuneError, FortunePeriod, FortuneResult, Gender,
    generate,
};
pub use ziping_solar::{
    AnalyticSource, SearchDirection, SolarError, SolarTerm, SolarTermEvent, SolarTermSource,
    nearest_principal_term, nearest_term, next_term, prev_term,
};
pub use ziping_time::{CivilDateTime, TimeError, apply_true_solar_time};
