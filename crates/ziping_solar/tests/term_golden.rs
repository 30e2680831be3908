//! Golden solar-term instants against published almanac times (UTC).

use ziping_solar::{
    AnalyticSource, SolarTerm, next_principal_term, next_term, prev_principal_term,
};
use ziping_time::{CivilDateTime, calendar_to_jd};

/// Almanac tolerance: the truncated series is good to a few minutes of
/// boundary time; allow 0.05 day.
const TOL_DAYS: f64 = 0.05;

fn jd_of(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> f64 {
    CivilDateTime::new(y, mo, d, h, mi, 0.0).to_jd()
}

#[test]
fn lichun_2024() {
    // 2024-02-04 08:27 UTC.
    let src = AnalyticSource;
    let ev = next_term(&src, jd_of(2024, 1, 25, 0, 0)).unwrap();
    assert_eq!(ev.term, SolarTerm::Lichun);
    assert!((ev.jd - jd_of(2024, 2, 4, 8, 27)).abs() < TOL_DAYS, "{}", ev.civil());
}

#[test]
fn chunfen_2024() {
    // Spring equinox 2024-03-20 03:06 UTC.
    let src = AnalyticSource;
    let ev = next_term(&src, jd_of(2024, 3, 10, 0, 0)).unwrap();
    assert_eq!(ev.term, SolarTerm::Chunfen);
    assert!((ev.jd - jd_of(2024, 3, 20, 3, 6)).abs() < TOL_DAYS, "{}", ev.civil());
}

#[test]
fn xiazhi_2024() {
    // Summer solstice 2024-06-20 20:51 UTC.
    let src = AnalyticSource;
    let ev = next_term(&src, jd_of(2024, 6, 10, 0, 0)).unwrap();
    assert_eq!(ev.term, SolarTerm::Xiazhi);
    assert!((ev.jd - jd_of(2024, 6, 20, 20, 51)).abs() < TOL_DAYS, "{}", ev.civil());
}

#[test]
fn dongzhi_2024() {
    // Winter solstice 2024-12-21 09:21 UTC.
    let src = AnalyticSource;
    let ev = next_term(&src, jd_of(2024, 12, 10, 0, 0)).unwrap();
    assert_eq!(ev.term, SolarTerm::Dongzhi);
    assert!((ev.jd - jd_of(2024, 12, 21, 9, 21)).abs() < TOL_DAYS, "{}", ev.civil());
}

#[test]
fn equinox_2000() {
    // 2000-03-20 07:35 UTC.
    let src = AnalyticSource;
    let ev = next_term(&src, jd_of(2000, 3, 10, 0, 0)).unwrap();
    assert_eq!(ev.term, SolarTerm::Chunfen);
    assert!((ev.jd - jd_of(2000, 3, 20, 7, 35)).abs() < TOL_DAYS, "{}", ev.civil());
}

#[test]
fn year_of_principal_terms_is_complete() {
    // Twelve principal boundaries walk a full year and return to Lichun.
    let src = AnalyticSource;
    let mut jd = calendar_to_jd(2023, 2, 1.0);
    let mut terms = Vec::new();
    for _ in 0..12 {
        let ev = next_principal_term(&src, jd).unwrap();
        terms.push(ev.term);
        jd = ev.jd;
    }
    assert_eq!(terms[0], SolarTerm::Lichun);
    assert_eq!(terms[11], SolarTerm::Xiaohan);
    let next = next_principal_term(&src, jd).unwrap();
    assert_eq!(next.term, SolarTerm::Lichun);
}

#[test]
fn prev_principal_before_lichun_is_xiaohan() {
    let src = AnalyticSource;
    let ev = prev_principal_term(&src, jd_of(2024, 2, 1, 0, 0)).unwrap();
    assert_eq!(ev.term, SolarTerm::Xiaohan);
}
