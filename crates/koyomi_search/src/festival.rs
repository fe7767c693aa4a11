//! Festival days anchored on solar terms, the day cycle and new moons.
//!
//! - 社日: the 戊 day nearest each equinox (by date), recorded at 00:00.
//! - 伝統的七夕: the 7th day of the lunar month whose first day is the
//!   latest new moon on or before the date of 処暑.
//! - 新暦七夕: July 7, 00:00 local.
//! - 雑節: 節分, 彼岸, 八十八夜 and 二百十日, offsets in whole days from
//!   立春 and the equinoxes that keep the time of day of the term.

use chrono::{Days, NaiveDate};
use koyomi_time::SearchWindow;

use crate::anchor::{AnchorMode, resolve_dates, resolve_instants};
use crate::cycle::STEM_TSUCHINOE;
use crate::engine::{CalendarEngine, SolarTermTable, find_term};
use crate::ephemeris::Ephemeris;
use crate::error::SearchError;
use crate::event::{EventRecord, sort_chronologically};
use crate::solar_term::SolarTerm;

/// Equinoxes and the season prefix of their derived events.
const EQUINOXES: [(SolarTerm, &str); 2] = [(SolarTerm::Shunbun, "春"), (SolarTerm::Shubun, "秋")];

/// Day 1 of the lunar month to 七夕.
const TANABATA_OFFSET_DAYS: f64 = 6.0;

/// 節分 is the day before 立春.
const SETSUBUN_OFFSET_DAYS: f64 = -1.0;

/// 八十八夜 is the 88th day counting 立春 as day 1.
const HACHIJUHACHIYA_OFFSET_DAYS: f64 = 87.0;

/// 二百十日 is the 210th day counting 立春 as day 1.
const NIHYAKU_TOKA_OFFSET_DAYS: f64 = 209.0;

/// 彼岸 spans three days either side of the equinox.
const HIGAN_HALF_SPAN: i32 = 3;

impl<E: Ephemeris> CalendarEngine<E> {
    /// 春社日 and 秋社日.
    pub fn shanichi(&self, year: i32) -> Result<Vec<EventRecord>, SearchError> {
        self.shanichi_from_terms(year, &self.solar_term_table(year)?)
    }

    pub(crate) fn shanichi_from_terms(
        &self,
        year: i32,
        table: &SolarTermTable,
    ) -> Result<Vec<EventRecord>, SearchError> {
        let range = self.config().shanichi_search_days;
        let mut records = Vec::with_capacity(2);
        for (term, season) in EQUINOXES {
            let name = format!("{season}社日");
            let Some(t) = find_term(table, term) else {
                log::warn!("{name} {year}: {} not found", term.kanji());
                continue;
            };
            let center = self.bridge().local_date(t)?;
            let (first, last) = date_span(center, range)?;
            let candidates = self
                .cycle()
                .dates_matching(first, last, |e| e.stem() == STEM_TSUCHINOE);
            let Some(day) = resolve_dates(
                &candidates,
                center,
                AnchorMode::Nearest { within_days: range },
            ) else {
                log::warn!("{name} {year}: no 戊 day within {range} days of {center}");
                continue;
            };
            let midnight = self.bridge().local_midnight(day)?;
            records.push(self.named_record(year, &name, midnight)?);
        }
        sort_chronologically(&mut records);
        Ok(records)
    }

    /// 伝統的七夕 and 新暦七夕.
    pub fn tanabata(&self, year: i32) -> Result<Vec<EventRecord>, SearchError> {
        self.tanabata_from_terms(year, &self.solar_term_table(year)?)
    }

    pub(crate) fn tanabata_from_terms(
        &self,
        year: i32,
        table: &SolarTermTable,
    ) -> Result<Vec<EventRecord>, SearchError> {
        let mut records = Vec::with_capacity(2);

        if let Some(july7) = NaiveDate::from_ymd_opt(year, 7, 7) {
            let t = self.bridge().local_midnight(july7)?;
            records.push(self.named_record(year, "新暦七夕", t)?);
        }

        match find_term(table, SolarTerm::Shosho) {
            Some(shosho) => {
                let lookback = f64::from(self.config().new_moon_lookback_days);
                let window = SearchWindow::around(shosho, lookback, 1.0)?;
                let new_moons = self.ephemeris().new_moons_in(window)?;
                let first_day =
                    resolve_instants(&new_moons, shosho, AnchorMode::BeforeOrEqual, self.bridge())?;
                match first_day {
                    Some(nm) => {
                        log::debug!("lunar month of 処暑 {year} starts {nm}");
                        let t = nm.add_days(TANABATA_OFFSET_DAYS);
                        records.push(self.named_record(year, "伝統的七夕", t)?);
                    }
                    None => log::warn!("伝統的七夕 {year}: no new moon before 処暑"),
                }
            }
            None => log::warn!("伝統的七夕 {year}: 処暑 not found"),
        }

        sort_chronologically(&mut records);
        Ok(records)
    }

    /// 節分, 彼岸 (seven days each), 八十八夜 and 二百十日.
    pub fn zassetsu(&self, year: i32) -> Result<Vec<EventRecord>, SearchError> {
        self.zassetsu_from_terms(year, &self.solar_term_table(year)?)
    }

    pub(crate) fn zassetsu_from_terms(
        &self,
        year: i32,
        table: &SolarTermTable,
    ) -> Result<Vec<EventRecord>, SearchError> {
        let mut records = Vec::with_capacity(17);

        match find_term(table, SolarTerm::Risshun) {
            Some(risshun) => {
                for (name, offset) in [
                    ("節分", SETSUBUN_OFFSET_DAYS),
                    ("八十八夜", HACHIJUHACHIYA_OFFSET_DAYS),
                    ("二百十日", NIHYAKU_TOKA_OFFSET_DAYS),
                ] {
                    records.push(self.named_record(year, name, risshun.add_days(offset))?);
                }
            }
            None => log::warn!("雑節 {year}: 立春 not found"),
        }

        for (term, season) in EQUINOXES {
            let Some(center) = find_term(table, term) else {
                log::warn!("{season}彼岸 {year}: {} not found", term.kanji());
                continue;
            };
            for offset in -HIGAN_HALF_SPAN..=HIGAN_HALF_SPAN {
                let day = offset + HIGAN_HALF_SPAN + 1;
                records.push(EventRecord::new(
                    format!("{year}{season}彼岸{day}日目"),
                    center.add_days(f64::from(offset)),
                    Some(format!("{season}彼岸")),
                    self.bridge(),
                )?);
            }
        }

        sort_chronologically(&mut records);
        Ok(records)
    }
}

/// `[center − days, center + days]`.
fn date_span(center: NaiveDate, days: u32) -> Result<(NaiveDate, NaiveDate), SearchError> {
    let d = Days::new(u64::from(days));
    let out = SearchError::InvalidWindow("date range outside calendar range");
    let first = center.checked_sub_days(d).ok_or(out.clone())?;
    let last = center.checked_add_days(d).ok_or(out)?;
    Ok((first, last))
}
