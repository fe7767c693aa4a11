//! Owned calendar handle over the analytic ephemeris.

use std::path::Path;

use chrono::NaiveDate;
use koyomi_ephem::{AnalyticConfig, AnalyticEphemeris};
use koyomi_search::{CalendarEngine, CycleEntry, EngineConfig, EventRecord};

use crate::error::KoyomiError;

/// A calendar engine bound to [`AnalyticEphemeris`].
///
/// Use this directly when several configurations are needed at once; the
/// free functions of this crate wrap a single process-wide instance.
#[derive(Debug)]
pub struct Koyomi {
    engine: CalendarEngine<AnalyticEphemeris>,
}

impl Koyomi {
    /// Build with the default ephemeris coverage.
    pub fn new(config: EngineConfig) -> Result<Self, KoyomiError> {
        Self::with_ephemeris(config, AnalyticConfig::default())
    }

    /// Build with explicit ephemeris settings.
    pub fn with_ephemeris(
        config: EngineConfig,
        ephemeris: AnalyticConfig,
    ) -> Result<Self, KoyomiError> {
        let eph = AnalyticEphemeris::new(ephemeris)?;
        Ok(Self {
            engine: CalendarEngine::new(eph, config)?,
        })
    }

    /// Build from a TOML configuration file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, KoyomiError> {
        Self::new(EngineConfig::load(path)?)
    }

    /// The underlying engine, for lower-level queries.
    pub fn engine(&self) -> &CalendarEngine<AnalyticEphemeris> {
        &self.engine
    }

    pub fn solar_terms(&self, year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
        Ok(self.engine.solar_terms(year)?)
    }

    pub fn doyo(&self, year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
        Ok(self.engine.doyo(year)?)
    }

    pub fn nyubai(&self, year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
        Ok(self.engine.nyubai(year)?)
    }

    pub fn hangesho(&self, year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
        Ok(self.engine.hangesho(year)?)
    }

    pub fn shanichi(&self, year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
        Ok(self.engine.shanichi(year)?)
    }

    pub fn tanabata(&self, year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
        Ok(self.engine.tanabata(year)?)
    }

    pub fn zassetsu(&self, year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
        Ok(self.engine.zassetsu(year)?)
    }

    pub fn cycle_days(&self, year: i32, ordinals: &[u8]) -> Result<Vec<EventRecord>, KoyomiError> {
        Ok(self.engine.cycle_days(year, ordinals)?)
    }

    pub fn year_cycle(&self, year: i32) -> CycleEntry {
        self.engine.year_cycle(year)
    }

    pub fn day_cycle(&self, date: NaiveDate) -> CycleEntry {
        self.engine.day_cycle(date)
    }

    /// Every event family of `year`, merged and sorted.
    pub fn year_events(&self, year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
        Ok(self.engine.year_events(year)?)
    }
}
