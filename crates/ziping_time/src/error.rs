//! Error types for civil-time validation and conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range.
    FieldOutOfRange {
        field: &'static str,
        value: i64,
    },
    /// Year is outside the supported [1600, 3000] window.
    YearOutOfRange(i32),
    /// Longitude is outside [-180, 180] degrees.
    LongitudeOutOfRange(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldOutOfRange { field, value } => {
                write!(f, "{field} out of range: {value}")
            }
            Self::YearOutOfRange(y) => write!(f, "year {y} outside supported range [1600, 3000]"),
            Self::LongitudeOutOfRange(lon) => {
                write!(f, "longitude {lon} outside [-180, 180] degrees")
            }
        }
    }
}

impl Error for TimeError {}
