//! Fortune-period generation: decade pillars walked from the month pillar,
//! with an onset age anchored to a real solar-term boundary.
//!
//! Direction follows the year-stem polarity and gender; pillars are pure
//! sexagenary index arithmetic; the onset age converts elapsed whole days to
//! the nearest month boundary at the fixed three-days-per-year rate and is
//! clamped into [0.5, 10.0]. Both the whole-day granularity and the clamp
//! are inherited policy, kept as named constants.

pub mod error;

use ziping_base::{Stem, YinYang, cycle_step};
use ziping_chart::{Chart, Pillar};
use ziping_solar::{SearchDirection, SolarTermEvent, SolarTermSource, nearest_principal_term};
use ziping_time::CivilDateTime;

pub use error::FortuneError;

/// Default number of decade periods.
pub const DEFAULT_PERIOD_COUNT: u8 = 10;
/// Maximum accepted period count.
pub const MAX_PERIOD_COUNT: u8 = 12;
/// Years spanned by each period.
pub const YEARS_PER_PERIOD: f64 = 10.0;
/// Elapsed days per year of onset age.
pub const DAYS_PER_ONSET_YEAR: f64 = 3.0;
/// Onset-age clamp window, in years.
pub const ONSET_AGE_MIN: f64 = 0.5;
pub const ONSET_AGE_MAX: f64 = 10.0;

/// Gender, used only to pick the progression direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Progression direction through the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FortuneDirection {
    Forward,
    Backward,
}

impl FortuneDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Backward => "Backward",
        }
    }
}

/// One decade period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FortunePeriod {
    pub pillar: Pillar,
    /// 1-indexed position in the sequence.
    pub order: u16,
    /// Exact start age in years.
    pub start_age: f64,
    /// Exact end age in years.
    pub end_age: f64,
}

/// The full fortune-period result for one chart and gender.
#[derive(Debug, Clone, PartialEq)]
pub struct FortuneResult {
    pub direction: FortuneDirection,
    /// Onset age in years, one-decimal precision, clamped.
    pub onset_age: f64,
    /// The solar-term boundary the onset was computed from.
    pub boundary: SolarTermEvent,
    pub periods: Vec<FortunePeriod>,
}

/// Progression direction: forward iff the year stem's polarity agrees with
/// the gender (yang year + male, or yin year + female).
pub fn direction_for(year_stem: Stem, gender: Gender) -> FortuneDirection {
    let yang = year_stem.polarity() == YinYang::Yang;
    let male = gender == Gender::Male;
    if yang == male {
        FortuneDirection::Forward
    } else {
        FortuneDirection::Backward
    }
}

/// Onset age from birth instant and boundary instant: elapsed whole days at
/// three days per year, one decimal, clamped.
pub fn onset_age_from_elapsed(birth_jd: f64, boundary_jd: f64) -> f64 {
    let whole_days = (boundary_jd - birth_jd).abs().floor();
    let years = whole_days / DAYS_PER_ONSET_YEAR;
    let rounded = (years * 10.0).round() / 10.0;
    rounded.clamp(ONSET_AGE_MIN, ONSET_AGE_MAX)
}

/// Generate the fortune periods for a chart.
///
/// `birth` must be the same (true-solar-corrected, if requested) instant the
/// chart was resolved from, so that the onset boundary and the month pillar
/// agree.
pub fn generate<S: SolarTermSource + ?Sized>(
    source: &S,
    chart: &Chart,
    birth: &CivilDateTime,
    gender: Gender,
    period_count: u8,
) -> Result<FortuneResult, FortuneError> {
    if period_count == 0 || period_count > MAX_PERIOD_COUNT {
        return Err(FortuneError::InvalidPeriodCount(period_count));
    }
    let month_index = chart
        .month()
        .cycle_index()
        .ok_or(FortuneError::InvalidMonthPillar)?;

    let direction = direction_for(chart.year().stem, gender);
    let search_direction = match direction {
        FortuneDirection::Forward => SearchDirection::Forward,
        FortuneDirection::Backward => SearchDirection::Backward,
    };

    let birth_jd = birth.to_jd();
    let boundary = match nearest_principal_term(source, birth_jd, search_direction) {
        Ok(ev) => ev,
        Err(e) => {
            // No approximate fallback: surface the failure.
            log::error!("onset boundary unresolved for birth {birth}: {e}");
            return Err(FortuneError::OnsetAgeUnavailable(e));
        }
    };
    let onset_age = onset_age_from_elapsed(birth_jd, boundary.jd);

    let step: i32 = match direction {
        FortuneDirection::Forward => 1,
        FortuneDirection::Backward => -1,
    };
    let periods = (1..=period_count as i32)
        .map(|k| {
            let index = cycle_step(month_index, step * k);
            let start_age = onset_age + YEARS_PER_PERIOD * (k - 1) as f64;
            FortunePeriod {
                pillar: Pillar::from_cycle_index(index),
                order: k as u16,
                start_age,
                end_age: start_age + YEARS_PER_PERIOD,
            }
        })
        .collect();

    Ok(FortuneResult {
        direction,
        onset_age,
        boundary,
        periods,
    })
}
