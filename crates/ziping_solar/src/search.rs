//! Bounded boundary search over apparent solar longitude.
//!
//! Day-stepping with a hard iteration cap, then bisection refinement of the
//! bracketed crossing. The cap can only be reached if the injected source is
//! defective (terms recur about every 16 days), so exhaustion is surfaced as a
//! fatal error and never retried.
//!
//! Boundary attribution invariant: a boundary instant belongs to the new
//! term. Forward search returns the first crossing strictly after the start
//! instant; backward search the last crossing at or before it. A boundary
//! exactly at midnight therefore lands on the new term's day from both
//! directions.

use crate::error::SolarError;
use crate::longitude::normalize_pm180;
use crate::source::SolarTermSource;
use crate::terms::{SolarTerm, SolarTermEvent};

/// Hard cap on day steps per search (~13 months).
pub const MAX_SEARCH_DAYS: u32 = 400;

/// Bisection iterations; brackets one day down to well under a second.
const REFINE_ITERATIONS: u32 = 40;

/// Search direction for boundary lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Longitude grid of all 24 terms: multiples of 15°.
const TERM_SPACING_DEG: f64 = 15.0;
/// Longitude grid of the 12 principal terms: 15° + multiples of 30°.
const PRINCIPAL_SPACING_DEG: f64 = 30.0;
const PRINCIPAL_PHASE_DEG: f64 = 15.0;

/// First term boundary strictly after `jd`.
pub fn next_term<S: SolarTermSource + ?Sized>(
    source: &S,
    jd: f64,
) -> Result<SolarTermEvent, SolarError> {
    crossing(source, jd, TERM_SPACING_DEG, 0.0, SearchDirection::Forward)
}

/// Last term boundary at or before `jd`.
pub fn prev_term<S: SolarTermSource + ?Sized>(
    source: &S,
    jd: f64,
) -> Result<SolarTermEvent, SolarError> {
    crossing(source, jd, TERM_SPACING_DEG, 0.0, SearchDirection::Backward)
}

/// First principal-term (chart-month) boundary strictly after `jd`.
pub fn next_principal_term<S: SolarTermSource + ?Sized>(
    source: &S,
    jd: f64,
) -> Result<SolarTermEvent, SolarError> {
    crossing(
        source,
        jd,
        PRINCIPAL_SPACING_DEG,
        PRINCIPAL_PHASE_DEG,
        SearchDirection::Forward,
    )
}

/// Last principal-term (chart-month) boundary at or before `jd`.
pub fn prev_principal_term<S: SolarTermSource + ?Sized>(
    source: &S,
    jd: f64,
) -> Result<SolarTermEvent, SolarError> {
    crossing(
        source,
        jd,
        PRINCIPAL_SPACING_DEG,
        PRINCIPAL_PHASE_DEG,
        SearchDirection::Backward,
    )
}

/// Nearest term boundary in a direction.
pub fn nearest_term<S: SolarTermSource + ?Sized>(
    source: &S,
    jd: f64,
    direction: SearchDirection,
) -> Result<SolarTermEvent, SolarError> {
    match direction {
        SearchDirection::Forward => next_term(source, jd),
        SearchDirection::Backward => prev_term(source, jd),
    }
}

/// Nearest principal-term boundary in a direction.
pub fn nearest_principal_term<S: SolarTermSource + ?Sized>(
    source: &S,
    jd: f64,
    direction: SearchDirection,
) -> Result<SolarTermEvent, SolarError> {
    match direction {
        SearchDirection::Forward => next_principal_term(source, jd),
        SearchDirection::Backward => prev_principal_term(source, jd),
    }
}

/// Locate the nearest grid crossing of the solar longitude.
///
/// The grid is `phase + k * spacing` degrees. Solar longitude increases
/// monotonically (~1°/day), so the signed distance to the enclosing grid
/// line brackets the crossing within one day step.
fn crossing<S: SolarTermSource + ?Sized>(
    source: &S,
    jd_start: f64,
    spacing: f64,
    phase: f64,
    direction: SearchDirection,
) -> Result<SolarTermEvent, SolarError> {
    let lon0 = source.solar_longitude(jd_start);
    let u = (lon0 - phase).rem_euclid(360.0);
    let k = (u / spacing).floor();

    let target_u = match direction {
        SearchDirection::Forward => (k + 1.0) * spacing,
        SearchDirection::Backward => k * spacing,
    };
    let target_lon = (phase + target_u).rem_euclid(360.0);

    // Signed distance from the target grid line; crossings are upward.
    let dist = |jd: f64| normalize_pm180(source.solar_longitude(jd) - target_lon);

    let step = match direction {
        SearchDirection::Forward => 1.0,
        SearchDirection::Backward => -1.0,
    };

    // Bracket the crossing: forward wants dist >= 0, backward wants dist < 0.
    let mut prev_jd = jd_start;
    let mut bracket = None;
    for i in 1..=MAX_SEARCH_DAYS {
        let jd = jd_start + step * i as f64;
        let d = dist(jd);
        let crossed = match direction {
            SearchDirection::Forward => d >= 0.0,
            SearchDirection::Backward => d < 0.0,
        };
        if crossed {
            bracket = Some(match direction {
                SearchDirection::Forward => (prev_jd, jd),
                SearchDirection::Backward => (jd, prev_jd),
            });
            break;
        }
        prev_jd = jd;
    }

    let (mut lo, mut hi) = match bracket {
        Some(b) => b,
        None => {
            let forward = direction == SearchDirection::Forward;
            log::error!(
                "solar-term search exhausted after {MAX_SEARCH_DAYS} day steps \
                 (from JD {jd_start}, forward={forward})"
            );
            return Err(SolarError::SearchExhausted {
                from_jd: jd_start,
                forward,
            });
        }
    };

    // Bisect: dist(lo) < 0 <= dist(hi).
    for _ in 0..REFINE_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if dist(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let jd_event = hi;

    let term = SolarTerm::from_longitude_deg(target_lon)
        .unwrap_or(SolarTerm::Lichun);

    Ok(SolarTermEvent {
        term,
        jd: jd_event,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::AnalyticSource;
    use ziping_time::calendar_to_jd;

    /// A defective source whose longitude never moves.
    struct StuckSource;

    impl SolarTermSource for StuckSource {
        fn solar_longitude(&self, _jd: f64) -> f64 {
            10.0
        }
    }

    #[test]
    fn forward_is_strictly_after_start() {
        let src = AnalyticSource;
        let jd = calendar_to_jd(2010, 7, 14.5);
        let ev = next_term(&src, jd).unwrap();
        assert!(ev.jd > jd);
        assert!(ev.jd - jd < 17.0);
    }

    #[test]
    fn backward_is_at_or_before_start() {
        let src = AnalyticSource;
        let jd = calendar_to_jd(2010, 7, 14.5);
        let ev = prev_term(&src, jd).unwrap();
        assert!(ev.jd <= jd);
        assert!(jd - ev.jd < 17.0);
    }

    #[test]
    fn boundary_belongs_to_new_term_in_both_directions() {
        // Search backward from an instant just past a boundary: the boundary
        // itself is returned. Forward from the same instant skips to the next.
        let src = AnalyticSource;
        let jd = calendar_to_jd(2015, 3, 1.0);
        let ev = next_term(&src, jd).unwrap();

        let just_after = ev.jd + 1e-6;
        let back = prev_term(&src, just_after).unwrap();
        assert_eq!(back.term, ev.term);
        assert!((back.jd - ev.jd).abs() < 1e-4);

        let next = next_term(&src, just_after).unwrap();
        assert_ne!(next.term, ev.term);
        assert!(next.jd > ev.jd + 10.0);
    }

    #[test]
    fn terms_advance_through_the_cycle() {
        let src = AnalyticSource;
        let mut jd = calendar_to_jd(2020, 1, 10.0);
        let mut prev_index = None;
        for _ in 0..24 {
            let ev = next_term(&src, jd).unwrap();
            if let Some(pi) = prev_index {
                assert_eq!(ev.term.index(), (pi + 1) % 24, "after index {pi}");
            }
            prev_index = Some(ev.term.index());
            jd = ev.jd;
        }
    }

    #[test]
    fn principal_search_only_returns_jie() {
        let src = AnalyticSource;
        let mut jd = calendar_to_jd(2018, 2, 1.0);
        for _ in 0..12 {
            let ev = next_principal_term(&src, jd).unwrap();
            assert!(ev.term.is_principal(), "{:?}", ev.term);
            jd = ev.jd;
        }
    }

    #[test]
    fn principal_spacing_near_thirty_days() {
        let src = AnalyticSource;
        let jd = calendar_to_jd(2005, 9, 20.0);
        let a = next_principal_term(&src, jd).unwrap();
        let b = next_principal_term(&src, a.jd).unwrap();
        let gap = b.jd - a.jd;
        assert!((28.0..33.0).contains(&gap), "gap={gap}");
    }

    #[test]
    fn stuck_source_exhausts_search() {
        let err = next_term(&StuckSource, 2_451_545.0).unwrap_err();
        assert!(matches!(
            err,
            SolarError::SearchExhausted { forward: true, .. }
        ));
        let err = prev_term(&StuckSource, 2_451_545.0).unwrap_err();
        assert!(matches!(
            err,
            SolarError::SearchExhausted { forward: false, .. }
        ));
    }

    #[test]
    fn forward_backward_agree_on_bracketing() {
        let src = AnalyticSource;
        let jd = calendar_to_jd(2001, 11, 3.25);
        let next = next_term(&src, jd).unwrap();
        let prev = prev_term(&src, jd).unwrap();
        assert!(prev.jd <= jd && jd < next.jd);
        assert_eq!((prev.term.index() + 1) % 24, next.term.index());
    }
}
