//! Calendar engine: wires window policies, the solver, the cycle index and
//! anchor resolution into per-family event lists.
//!
//! Every family returns records restricted to the requested zoned calendar
//! year, sorted chronologically. The seasonal families live in
//! [`crate::seasonal`], the festival families in [`crate::festival`].

use chrono::{Datelike, NaiveDate};
use koyomi_time::{Instant, TimeBridge};

use crate::config::EngineConfig;
use crate::cycle::{CycleEntry, CycleIndex};
use crate::ephemeris::{Ephemeris, SignalFamily};
use crate::error::SearchError;
use crate::event::{EventRecord, sort_chronologically};
use crate::solar_term::SolarTerm;
use crate::solver::LongitudeSolver;
use crate::window::WindowPolicy;

/// Cycle ordinals listed by [`CalendarEngine::year_events`]: 甲子, 庚申, 己巳.
pub const NOTABLE_CYCLE_ORDINALS: [u8; 3] = [1, 57, 6];

/// Solar-term instants of one year, in time order.
pub type SolarTermTable = Vec<(SolarTerm, Instant)>;

/// Derives calendar events from an ephemeris and fixed configuration.
///
/// Holds no mutable state; a shared reference can be used from several
/// threads when the ephemeris allows it.
#[derive(Debug)]
pub struct CalendarEngine<E> {
    ephemeris: E,
    config: EngineConfig,
    bridge: TimeBridge,
    cycle: CycleIndex,
}

impl<E: Ephemeris> CalendarEngine<E> {
    /// Build an engine, validating `config`.
    pub fn new(ephemeris: E, config: EngineConfig) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        let bridge = TimeBridge::new(config.delta_t_seconds, config.utc_offset_seconds)?;
        let cycle = CycleIndex::new(config.cycle_epoch_date, config.cycle_epoch_year);
        Ok(Self {
            ephemeris,
            config,
            bridge,
            cycle,
        })
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn bridge(&self) -> &TimeBridge {
        &self.bridge
    }

    pub fn cycle(&self) -> &CycleIndex {
        &self.cycle
    }

    /// Solver over this engine's ephemeris and tolerances.
    pub fn solver(&self) -> Result<LongitudeSolver<'_, E>, SearchError> {
        LongitudeSolver::new(&self.ephemeris, self.config.solver)
    }

    pub(crate) fn is_in_year(&self, t: Instant, year: i32) -> Result<bool, SearchError> {
        Ok(self.bridge.to_zoned(t)?.year() == year)
    }

    pub(crate) fn named_record(
        &self,
        year: i32,
        name: &str,
        t: Instant,
    ) -> Result<EventRecord, SearchError> {
        EventRecord::named(year, name, t, &self.bridge)
    }

    // -----------------------------------------------------------------------
    // Solar terms
    // -----------------------------------------------------------------------

    /// Every solar term whose zoned date falls in `year`, in time order.
    pub fn solar_term_table(&self, year: i32) -> Result<SolarTermTable, SearchError> {
        let mut table = Vec::with_capacity(24);
        let sweep = WindowPolicy::YearSweep { pad_months: 1 };
        for window in sweep.windows(year, &self.bridge)? {
            for c in self.ephemeris.crossings(window, SignalFamily::SolarTerms)? {
                let Some(term) = SolarTerm::from_index(c.index) else {
                    log::warn!("ignoring crossing with out-of-range index {}", c.index);
                    continue;
                };
                if self.is_in_year(c.instant, year)? {
                    table.push((term, c.instant));
                }
            }
        }
        table.sort_by(|a, b| a.1.total_cmp(&b.1));
        log::debug!("{} solar terms in {year}", table.len());
        Ok(table)
    }

    /// Instant of one solar term in `year`, if it occurs.
    pub fn solar_term(&self, year: i32, term: SolarTerm) -> Result<Option<Instant>, SearchError> {
        Ok(find_term(&self.solar_term_table(year)?, term))
    }

    /// The 24 solar terms of `year` as records named by their kanji.
    pub fn solar_terms(&self, year: i32) -> Result<Vec<EventRecord>, SearchError> {
        self.solar_term_records(year, &self.solar_term_table(year)?)
    }

    fn solar_term_records(
        &self,
        year: i32,
        table: &SolarTermTable,
    ) -> Result<Vec<EventRecord>, SearchError> {
        table
            .iter()
            .map(|(term, t)| self.named_record(year, term.kanji(), *t))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Sexagenary cycle
    // -----------------------------------------------------------------------

    /// Cycle entry of a year.
    pub fn year_cycle(&self, year: i32) -> CycleEntry {
        self.cycle.for_year(year)
    }

    /// Cycle entry of a calendar date.
    pub fn day_cycle(&self, date: NaiveDate) -> CycleEntry {
        self.cycle.for_date(date)
    }

    /// Every date of `year` whose cycle ordinal is in `ordinals`, as records
    /// at 00:00 local time named like `甲子日`.
    pub fn cycle_days(&self, year: i32, ordinals: &[u8]) -> Result<Vec<EventRecord>, SearchError> {
        if ordinals.iter().any(|o| CycleEntry::from_ordinal(*o).is_none()) {
            return Err(SearchError::InvalidConfig("cycle ordinal must be 1..=60"));
        }
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(SearchError::InvalidWindow(
            "year outside calendar range",
        ))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(SearchError::InvalidWindow(
            "year outside calendar range",
        ))?;
        let dates = self
            .cycle
            .dates_matching(first, last, |e| ordinals.contains(&e.ordinal()));
        dates
            .into_iter()
            .map(|d| {
                let entry = self.cycle.for_date(d);
                EventRecord::new(
                    format!("{}{entry}日", d.format("%Y%m%d")),
                    self.bridge.local_midnight(d)?,
                    Some(format!("{entry}日")),
                    &self.bridge,
                )
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Aggregate
    // -----------------------------------------------------------------------

    /// Every event family for `year`, merged and sorted.
    ///
    /// Solar terms are computed once and shared by the families derived
    /// from them.
    pub fn year_events(&self, year: i32) -> Result<Vec<EventRecord>, SearchError> {
        let table = self.solar_term_table(year)?;
        let mut records = self.solar_term_records(year, &table)?;
        records.extend(self.doyo(year)?);
        records.extend(self.nyubai(year)?);
        records.extend(self.hangesho(year)?);
        records.extend(self.shanichi_from_terms(year, &table)?);
        records.extend(self.tanabata_from_terms(year, &table)?);
        records.extend(self.zassetsu_from_terms(year, &table)?);
        records.extend(self.cycle_days(year, &NOTABLE_CYCLE_ORDINALS)?);
        sort_chronologically(&mut records);
        log::debug!("{} events in {year}", records.len());
        Ok(records)
    }
}

pub(crate) fn find_term(table: &SolarTermTable, term: SolarTerm) -> Option<Instant> {
    table.iter().find(|(t, _)| *t == term).map(|(_, i)| *i)
}
