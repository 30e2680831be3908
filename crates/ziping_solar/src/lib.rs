//! Solar-term engine: apparent solar longitude and bounded boundary search.
//!
//! This crate provides:
//! - A truncated analytic solar-longitude series (no external data files)
//! - The 24 solar terms, with the 12 principal (chart-month) terms marked
//! - An injectable `SolarTermSource` abstraction
//! - Bounded forward/backward boundary search with a hard 400-day cap

pub mod error;
pub mod longitude;
pub mod search;
pub mod source;
pub mod terms;

pub use error::SolarError;
pub use longitude::{apparent_solar_longitude, jd_to_centuries, normalize_pm180};
pub use search::{
    MAX_SEARCH_DAYS, SearchDirection, nearest_principal_term, nearest_term, next_principal_term,
    next_term, prev_principal_term, prev_term,
};
pub use source::{AnalyticSource, SolarTermSource};
pub use terms::{ALL_TERMS, SolarTerm, SolarTermEvent};
