//! Civil date/time handling and Julian-day conversions.
//!
//! This crate provides:
//! - `CivilDateTime`, the canonical UTC representation used throughout
//!   the engine
//! - Julian Date ↔ calendar conversions (proleptic Gregorian)
//! - The true-solar-time correction (4 minutes per degree of longitude)

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{CivilDateTime, apply_true_solar_time};
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jdn_of_civil_date};
