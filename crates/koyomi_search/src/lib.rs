//! Root finding and anchor resolution for Japanese calendar events.
//!
//! This crate provides:
//! - Bisection solver locating when the sun's ecliptic longitude reaches a
//!   target, with wraparound handling, bracket checks and an iteration cap
//! - Window policies choosing where each event family searches
//! - Sexagenary (60-element) cycle indexing of days and years
//! - Anchor resolution (latest on-or-before, nearest either side)
//! - [`CalendarEngine`], which combines these into solar terms, 土用,
//!   入梅, 半夏生, 社日, 七夕, 雑節 and cycle-day listings
//!
//! Ephemeris data comes from implementations of the traits in
//! [`ephemeris`]; this crate never computes positions itself.

pub mod anchor;
pub mod angle;
pub mod config;
pub mod cycle;
pub mod engine;
pub mod ephemeris;
pub mod error;
pub mod event;
pub mod festival;
pub mod seasonal;
pub mod solar_term;
pub mod solver;
pub mod window;

pub use anchor::{AnchorMode, resolve_by_date, resolve_dates, resolve_instants};
pub use angle::{circular_diff, normalize_360, normalize_to_pm180, unwrap_near};
pub use config::{ConfigError, EngineConfig};
pub use cycle::{CycleEntry, CycleIndex};
pub use engine::{CalendarEngine, NOTABLE_CYCLE_ORDINALS, SolarTermTable};
pub use ephemeris::{
    Crossing, CrossingEnumerator, Ephemeris, EphemerisError, LongitudeSampler, LunarPhaseSource,
    SignalFamily,
};
pub use error::SearchError;
pub use event::{EventRecord, sort_chronologically};
pub use seasonal::{DOYO_EVENTS, HANGESHO, LongitudeEvent, NYUBAI};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm};
pub use solver::{LongitudeSolution, LongitudeSolver, SolverConfig};
pub use window::WindowPolicy;
