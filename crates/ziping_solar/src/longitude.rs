//! Truncated analytic solar theory.
//!
//! Computes the Sun's apparent ecliptic longitude from the mean longitude,
//! the equation of center, aberration, and the principal nutation term,
//! good to about 0.01° over [1600, 3000]; boundary instants within ~15 minutes.
//!
//! Source: standard low-precision solar theory (Meeus, Astronomical
//! Algorithms, 2nd ed., ch. 25). Public domain formulas.

use ziping_time::J2000_JD;

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Geometric mean longitude of the Sun, degrees.
fn mean_longitude(t: f64) -> f64 {
    280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t
}

/// Mean anomaly of the Sun, degrees.
fn mean_anomaly(t: f64) -> f64 {
    357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t
}

/// Equation of center, degrees.
fn equation_of_center(t: f64, m_deg: f64) -> f64 {
    let m = m_deg.to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Apparent ecliptic longitude of the Sun in degrees, normalized to [0, 360).
///
/// `jd` is a UTC Julian date; the UTC↔TT offset (~1 minute of arc-motion
/// error at most) is far below the series truncation and is ignored.
pub fn apparent_solar_longitude(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let l0 = mean_longitude(t);
    let m = mean_anomaly(t);
    let true_lon = l0 + equation_of_center(t, m);

    // Aberration and the dominant nutation-in-longitude term.
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = true_lon - 0.005_69 - 0.004_78 * omega.sin();

    apparent.rem_euclid(360.0)
}

/// Normalize an angle difference into [-180, 180).
pub fn normalize_pm180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}
