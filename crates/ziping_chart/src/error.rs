//! Error types for chart construction and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ziping_solar::SolarError;
use ziping_time::TimeError;

/// Errors from chart building, strength evaluation, or pattern
/// classification.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed date/time or longitude; rejected before any computation.
    InvalidInput(TimeError),
    /// The underlying solar-term search failed (fatal, not retried).
    Solar(SolarError),
    /// The classifier cascade failed to resolve exactly one structure.
    /// Unreachable by construction; a defect if ever observed.
    PatternAmbiguous(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid chart input: {e}"),
            Self::Solar(e) => write!(f, "solar-term resolution failed: {e}"),
            Self::PatternAmbiguous(detail) => {
                write!(f, "pattern cascade invariant violated: {detail}")
            }
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::Solar(e) => Some(e),
            Self::PatternAmbiguous(_) => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e)
    }
}

impl From<SolarError> for ChartError {
    fn from(e: SolarError) -> Self {
        Self::Solar(e)
    }
}
