//! Collaborator interfaces: the astronomical signal providers.
//!
//! The engine never computes positions itself. It samples solar longitude,
//! asks for discrete partition crossings, and asks for new-moon instants
//! through these traits. Implementations must be shareable across threads
//! for read-only use.

use std::error::Error;
use std::fmt::{Display, Formatter};

use koyomi_time::{Instant, SearchWindow};

/// Failures reported by an ephemeris implementation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Requested epoch lies outside the provider's coverage.
    OutOfRange { jd_tt: f64 },
    /// The provider could not produce a value.
    Unavailable(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { jd_tt } => write!(f, "epoch JD {jd_tt} outside ephemeris coverage"),
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

/// Partition of the ecliptic used by discrete crossing enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalFamily {
    /// 24 boundaries every 15°, index `i` at `15·i` degrees.
    SolarTerms,
}

impl SignalFamily {
    /// Number of boundaries in one revolution.
    pub const fn count(self) -> u8 {
        match self {
            Self::SolarTerms => 24,
        }
    }

    /// Width of one partition in degrees.
    pub const fn step_deg(self) -> f64 {
        match self {
            Self::SolarTerms => 15.0,
        }
    }

    /// Longitude of boundary `index`.
    pub fn boundary_deg(self, index: u8) -> f64 {
        f64::from(index % self.count()) * self.step_deg()
    }
}

/// The signal crossed boundary `index` of its family at `instant`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub instant: Instant,
    pub index: u8,
}

/// Apparent geocentric ecliptic longitude of the sun.
pub trait LongitudeSampler: Send + Sync {
    /// Longitude in degrees, [0, 360).
    fn longitude_at(&self, t: Instant) -> Result<f64, EphemerisError>;
}

/// Enumerates every partition crossing inside a window, in time order.
pub trait CrossingEnumerator: Send + Sync {
    fn crossings(
        &self,
        window: SearchWindow,
        family: SignalFamily,
    ) -> Result<Vec<Crossing>, EphemerisError>;
}

/// Instants of new moon (lunar phase 0).
pub trait LunarPhaseSource: Send + Sync {
    /// Every new moon inside `window`, in time order.
    fn new_moons_in(&self, window: SearchWindow) -> Result<Vec<Instant>, EphemerisError>;
}

/// Everything the calendar engine needs from an ephemeris.
pub trait Ephemeris: LongitudeSampler + CrossingEnumerator + LunarPhaseSource {}

impl<T> Ephemeris for T where T: LongitudeSampler + CrossingEnumerator + LunarPhaseSource {}
