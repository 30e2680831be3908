//! Chart construction from a civil instant.
//!
//! Year and month pillars hang off solar-term boundaries, not civil
//! boundaries: the year opens at Lichun and each month at a principal term.
//! Day and hour pillars are pure sexagenary arithmetic from a fixed
//! day-count anchor.

use ziping_base::{ALL_BRANCHES, ALL_STEMS, cycle_pair, cycle_step};
use ziping_solar::{SolarTerm, SolarTermSource, prev_principal_term};
use ziping_time::{CivilDateTime, apply_true_solar_time, jdn_of_civil_date};

use crate::error::ChartError;
use crate::pillar::{Chart, Pillar};

/// A day whose sexagenary index is 0 (JiaZi): 1949-10-01.
/// Day index = (JDN + 49) mod 60.
const DAY_ANCHOR_OFFSET: i64 = 49;

/// How the late Zi hour (23:00–23:59) derives its stem.
///
/// The day pillar keeps the midnight boundary under both policies; the two
/// classical schools disagree only on which day's stem seeds the hour stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZiHourPolicy {
    /// Late Zi takes its hour stem from the next day's stem.
    #[default]
    LateZiNextDay,
    /// Late Zi keeps the current day's stem.
    LateZiSameDay,
}

/// Resolve a civil instant into the four pillars.
///
/// `longitude` (degrees east, [-180, 180]) applies the true-solar-time
/// correction before any boundary is consulted. Input is validated before
/// any computation.
pub fn resolve_chart<S: SolarTermSource + ?Sized>(
    source: &S,
    birth: &CivilDateTime,
    longitude: Option<f64>,
    zi_policy: ZiHourPolicy,
) -> Result<Chart, ChartError> {
    birth.validate()?;
    let dt = match longitude {
        Some(lon) => apply_true_solar_time(birth, lon)?,
        None => *birth,
    };
    let jd = dt.to_jd();

    // Month segment: the principal term at or before the instant.
    let month_event = prev_principal_term(source, jd)?;
    let month_ordinal = month_event.term.month_ordinal().unwrap_or(0) as u32;

    // The chart year opened at the Lichun `month_ordinal` boundaries back.
    let mut lichun_event = month_event;
    for _ in 0..month_ordinal {
        lichun_event = prev_principal_term(source, lichun_event.jd - 1.0)?;
    }
    debug_assert_eq!(lichun_event.term, SolarTerm::Lichun);
    let chart_year = lichun_event.civil().year;

    let year_stem_idx = (chart_year - 4).rem_euclid(10) as u32;
    let year_branch_idx = (chart_year - 4).rem_euclid(12) as u32;
    let year = Pillar::new(
        ALL_STEMS[year_stem_idx as usize],
        ALL_BRANCHES[year_branch_idx as usize],
    );

    // Five-tigers rule: the first (Yin) month's stem follows the year stem.
    let month_branch_idx = (2 + month_ordinal) % 12;
    let month_stem_idx = ((year_stem_idx % 5) * 2 + 2 + month_ordinal) % 10;
    let month = Pillar::new(
        ALL_STEMS[month_stem_idx as usize],
        ALL_BRANCHES[month_branch_idx as usize],
    );

    // Day pillar: midnight civil boundary, fixed JiaZi anchor.
    let jdn = jdn_of_civil_date(dt.year, dt.month, dt.day);
    let day_index = (jdn + DAY_ANCHOR_OFFSET).rem_euclid(60) as u8;
    let (day_stem, day_branch) = cycle_pair(day_index);
    let day = Pillar::new(day_stem, day_branch);

    // Five-rats rule: the Zi hour's stem follows the (policy-selected) day stem.
    let hour_branch_idx = ((dt.hour + 1) / 2) % 12;
    let seed_stem = if dt.hour == 23 && zi_policy == ZiHourPolicy::LateZiNextDay {
        cycle_pair(cycle_step(day_index, 1)).0
    } else {
        day_stem
    };
    let hour_stem_idx = ((seed_stem.index() as u32 % 5) * 2 + hour_branch_idx) % 10;
    let hour = Pillar::new(
        ALL_STEMS[hour_stem_idx as usize],
        ALL_BRANCHES[hour_branch_idx as usize],
    );

    Ok(Chart::new(year, month, day, hour))
}
