//! Time representation for the koyomi calendar engine.
//!
//! This crate provides:
//! - [`Instant`], a point on the continuous TT time scale (Julian Date)
//! - [`SearchWindow`], a closed interval of instants handed to solvers
//! - [`TimeBridge`], conversion between instants and fixed-offset zoned
//!   calendar date-times (UTC+9 by default, no daylight-saving rules)

pub mod error;
pub mod julian;
pub mod window;
pub mod zoned;

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::Sub;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, jd_to_centuries,
    jd_to_unix_seconds, unix_seconds_to_jd,
};
pub use window::SearchWindow;
pub use zoned::{JST_OFFSET_SECONDS, LABEL_FORMAT, TimeBridge, ZonedInstant, format_label};

/// A point in continuous time, stored as a Julian Date in Terrestrial Time.
///
/// Subtracting two instants yields elapsed days. Ordering is the ordering of
/// the underlying Julian Date; use [`Instant::total_cmp`] when sorting.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    jd_tt: f64,
}

impl Instant {
    /// Create an instant from a Julian Date in TT.
    pub const fn from_jd_tt(jd_tt: f64) -> Self {
        Self { jd_tt }
    }

    /// Julian Date in TT.
    pub const fn as_jd_tt(self) -> f64 {
        self.jd_tt
    }

    /// The instant halfway between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            jd_tt: 0.5 * (self.jd_tt + other.jd_tt),
        }
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd_tt: self.jd_tt + days,
        }
    }

    /// Whether the underlying Julian Date is finite.
    pub fn is_finite(self) -> bool {
        self.jd_tt.is_finite()
    }

    /// Total ordering over instants, suitable for `sort_by`.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.jd_tt.total_cmp(&other.jd_tt)
    }
}

impl Sub for Instant {
    type Output = f64;

    /// Elapsed days from `rhs` to `self`.
    fn sub(self, rhs: Self) -> f64 {
        self.jd_tt - rhs.jd_tt
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {:.6} TT", self.jd_tt)
    }
}
