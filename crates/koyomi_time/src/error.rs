//! Error types for instant and calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from instant ↔ calendar conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields do not name a real date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Instant cannot be represented as a calendar date-time.
    OutOfRange { jd_tt: f64 },
    /// UTC offset outside the ±18 h range accepted by calendar zones.
    InvalidOffset { seconds: i32 },
    /// A non-finite value was supplied where a time was expected.
    NonFinite,
    /// Window end does not lie strictly after its start.
    EmptyWindow { start_jd: f64, end_jd: f64 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::OutOfRange { jd_tt } => write!(f, "instant out of calendar range: JD {jd_tt}"),
            Self::InvalidOffset { seconds } => write!(f, "invalid UTC offset: {seconds} s"),
            Self::NonFinite => write!(f, "non-finite time value"),
            Self::EmptyWindow { start_jd, end_jd } => {
                write!(f, "empty search window: JD {start_jd} .. JD {end_jd}")
            }
        }
    }
}

impl Error for TimeError {}
