//! Error types for solar-term search.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the bounded solar-term boundary search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// The day-stepping search hit its iteration cap without finding a
    /// boundary. Indicates a data or logic defect, never a transient
    /// condition; must not be retried.
    SearchExhausted {
        from_jd: f64,
        forward: bool,
    },
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SearchExhausted { from_jd, forward } => write!(
                f,
                "solar-term search exhausted ({} from JD {from_jd})",
                if *forward { "forward" } else { "backward" }
            ),
        }
    }
}

impl Error for SolarError {}
