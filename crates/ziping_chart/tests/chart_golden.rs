//! Golden end-to-end chart resolutions and analysis invariants.

use ziping_base::{Branch, Stem};
use ziping_chart::{
    Pillar, StrengthLevel, ZiHourPolicy, classify, evaluate, resolve_chart,
};
use ziping_solar::AnalyticSource;
use ziping_time::CivilDateTime;

fn resolve(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> ziping_chart::Chart {
    let dt = CivilDateTime::new(y, mo, d, h, mi, 0.0);
    resolve_chart(&AnalyticSource, &dt, None, ZiHourPolicy::default()).unwrap()
}

#[test]
fn golden_chart_2000_06_10() {
    let chart = resolve(2000, 6, 10, 12, 0);
    assert_eq!(chart.to_string(), "GengChen RenWu JiHai GengWu");
}

#[test]
fn golden_day_pillars() {
    // Known sexagenary days: 1949-10-01 was JiaZi, 2000-01-01 was WuWu.
    assert_eq!(
        resolve(1949, 10, 1, 12, 0).day(),
        Pillar::new(Stem::Jia, Branch::Zi)
    );
    assert_eq!(
        resolve(2000, 1, 1, 12, 0).day(),
        Pillar::new(Stem::Wu, Branch::Wu)
    );
}

#[test]
fn chart_pillars_are_cycle_valid() {
    // Every resolved pillar must be one of the 60 real combinations.
    for (y, mo, d, h) in [
        (1984, 2, 2, 0),
        (1990, 5, 15, 10),
        (2001, 1, 15, 23),
        (2024, 8, 31, 6),
        (1964, 12, 5, 18),
    ] {
        let chart = resolve(y, mo, d, h, 30);
        for pillar in chart.pillars() {
            assert!(pillar.cycle_index().is_some(), "{chart} from {y}-{mo}-{d}");
        }
    }
}

#[test]
fn strength_and_pattern_are_deterministic_end_to_end() {
    let a = resolve(1990, 5, 15, 10, 30);
    let b = resolve(1990, 5, 15, 10, 30);
    assert_eq!(a, b);
    assert_eq!(evaluate(&a), evaluate(&b));
    assert_eq!(classify(&a).unwrap(), classify(&b).unwrap());
}

#[test]
fn strength_levels_span_a_spread_of_charts() {
    // Resolved charts land on plausible levels; the report always carries a
    // full distribution of mass 8.
    for (y, mo, d, h) in [(1975, 3, 8, 4), (1988, 11, 21, 16), (2010, 7, 2, 9)] {
        let chart = resolve(y, mo, d, h, 0);
        let report = evaluate(&chart);
        assert!((report.distribution.total() - 8.0).abs() < 1e-9);
        assert!(report.support_score >= 0.0 && report.pressure_score >= 0.0);
        assert!(matches!(
            report.level,
            StrengthLevel::Weak
                | StrengthLevel::ModeratelyWeak
                | StrengthLevel::Balanced
                | StrengthLevel::ModeratelyStrong
                | StrengthLevel::Dominant
        ));
    }
}
