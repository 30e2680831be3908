//! Error types for fortune-period generation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ziping_solar::SolarError;

/// Errors from fortune-period generation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FortuneError {
    /// The onset-age boundary could not be resolved. Fatal: there is no
    /// approximate fallback.
    OnsetAgeUnavailable(SolarError),
    /// Requested period count outside 1..=12.
    InvalidPeriodCount(u8),
    /// The chart's month pillar is not a valid sexagenary combination.
    InvalidMonthPillar,
}

impl Display for FortuneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnsetAgeUnavailable(e) => write!(f, "onset age unavailable: {e}"),
            Self::InvalidPeriodCount(n) => {
                write!(f, "period count {n} outside supported range 1..=12")
            }
            Self::InvalidMonthPillar => write!(f, "month pillar is not a sexagenary combination"),
        }
    }
}

impl Error for FortuneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OnsetAgeUnavailable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SolarError> for FortuneError {
    fn from(e: SolarError) -> Self {
        Self::OnsetAgeUnavailable(e)
    }
}
