//! UTC calendar date/time with sub-second precision.
//!
//! Provides `CivilDateTime`, the canonical UTC representation used throughout
//! the engine. Local clock times must be converted to UTC by the caller; the
//! optional true-solar-time correction is applied on top of UTC.

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Validate all calendar fields.
    ///
    /// Years outside [1600, 3000] are rejected: solar-term accuracy degrades
    /// outside that window and the sexagenary anchors are only exercised
    /// within it.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1600..=3000).contains(&self.year) {
            return Err(TimeError::YearOutOfRange(self.year));
        }
        if self.month < 1 || self.month > 12 {
            return Err(TimeError::FieldOutOfRange {
                field: "month",
                value: self.month as i64,
            });
        }
        let max_day = days_in_month(self.year, self.month);
        if self.day < 1 || self.day > max_day {
            return Err(TimeError::FieldOutOfRange {
                field: "day",
                value: self.day as i64,
            });
        }
        if self.hour > 23 {
            return Err(TimeError::FieldOutOfRange {
                field: "hour",
                value: self.hour as i64,
            });
        }
        if self.minute > 59 {
            return Err(TimeError::FieldOutOfRange {
                field: "minute",
                value: self.minute as i64,
            });
        }
        if !self.second.is_finite() || self.second < 0.0 || self.second >= 60.0 {
            return Err(TimeError::FieldOutOfRange {
                field: "second",
                value: self.second as i64,
            });
        }
        Ok(())
    }

    /// Convert to Julian Date (UTC).
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert from a Julian Date (UTC) back to calendar fields.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

/// Apply the true-solar-time correction for a geographic longitude.
///
/// The mean-solar offset is 4 minutes per degree of longitude east of the
/// prime meridian (the input is UTC, so the reference meridian is 0°).
/// Longitude must lie in [-180, 180], east positive.
pub fn apply_true_solar_time(
    dt: &CivilDateTime,
    longitude_deg: f64,
) -> Result<CivilDateTime, TimeError> {
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(TimeError::LongitudeOutOfRange(longitude_deg));
    }
    let shift_days = longitude_deg * 4.0 / 1440.0;
    Ok(CivilDateTime::from_jd(dt.to_jd() + shift_days))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
