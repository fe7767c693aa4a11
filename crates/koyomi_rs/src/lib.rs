//! Convenience wrapper for the koyomi Japanese calendar engine.
//!
//! Provides a global calendar and free functions returning the events of
//! a year, with the analytic ephemeris built in. [`Koyomi`] is the owned
//! equivalent when more than one configuration is needed.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use koyomi_rs::*;
//!
//! init(EngineConfig::default()).expect("calendar init");
//!
//! for event in year_events(2024).unwrap() {
//!     println!("{event}");
//! }
//! ```

pub mod convenience;
pub mod error;
pub mod global;
pub mod koyomi;

pub use convenience::{
    cycle_days, day_cycle, doyo, hangesho, nyubai, shanichi, solar_terms, tanabata, year_cycle,
    year_events, zassetsu,
};
pub use error::KoyomiError;
pub use global::{init, is_initialized};
pub use koyomi::Koyomi;

// Re-export the types callers see so they need not depend on the inner crates.
pub use koyomi_ephem::{AnalyticConfig, AnalyticEphemeris};
pub use koyomi_search::{
    ConfigError, CycleEntry, EngineConfig, EphemerisError, EventRecord, NOTABLE_CYCLE_ORDINALS,
    SearchError, SolarTerm, SolverConfig,
};
pub use koyomi_time::{Instant, TimeBridge};
