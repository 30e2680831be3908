//! Unified error type for the high-level API.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ziping_chart::ChartError;
use ziping_fortune::FortuneError;

/// Any failure from the full analysis pipeline.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ZipingError {
    Chart(ChartError),
    Fortune(FortuneError),
}

impl Display for ZipingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(e) => write!(f, "{e}"),
            Self::Fortune(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ZipingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(e) => Some(e),
            Self::Fortune(e) => Some(e),
        }
    }
}

impl From<ChartError> for ZipingError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<FortuneError> for ZipingError {
    fn from(e: FortuneError) -> Self {
        Self::Fortune(e)
    }
}

impl From<ziping_time::TimeError> for ZipingError {
    fn from(e: ziping_time::TimeError) -> Self {
        Self::Chart(ChartError::InvalidInput(e))
    }
}
