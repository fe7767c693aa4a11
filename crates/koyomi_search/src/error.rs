//! Error types for longitude search and event orchestration.

use std::error::Error;
use std::fmt::{Display, Formatter};

use koyomi_time::TimeError;

use crate::ephemeris::EphemerisError;

/// Errors from root finding, window construction and event orchestration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Solver or engine configuration rejected by validation.
    InvalidConfig(&'static str),
    /// A window policy could not produce a usable search window.
    InvalidWindow(&'static str),
    /// The signal does not cross the target inside the window.
    NotBracketed {
        target_deg: f64,
        start_diff_deg: f64,
        end_diff_deg: f64,
    },
    /// Bisection hit its iteration cap before the bracket shrank enough.
    NoConvergence { iterations: u32, width_days: f64 },
    /// The ephemeris collaborator failed.
    Ephemeris(EphemerisError),
    /// Instant or calendar conversion failed.
    Time(TimeError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidWindow(msg) => write!(f, "invalid search window: {msg}"),
            Self::NotBracketed {
                target_deg,
                start_diff_deg,
                end_diff_deg,
            } => write!(
                f,
                "target {target_deg}° not bracketed: window ends are {start_diff_deg:+.4}° and {end_diff_deg:+.4}° from target"
            ),
            Self::NoConvergence {
                iterations,
                width_days,
            } => write!(
                f,
                "no convergence after {iterations} iterations (bracket width {width_days:.3e} d)"
            ),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
