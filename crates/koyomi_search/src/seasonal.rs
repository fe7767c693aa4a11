//! Seasonal markers defined by a single solar longitude.
//!
//! Each marker is a target longitude plus the window policy that isolates
//! one crossing per window. 土用 entries sit near month boundaries of
//! January, April, July and October, so they are searched across the year
//! boundary and disambiguated by the year filter alone.

use koyomi_time::Instant;

use crate::engine::CalendarEngine;
use crate::ephemeris::Ephemeris;
use crate::error::SearchError;
use crate::event::{EventRecord, sort_chronologically};
use crate::window::WindowPolicy;

/// A named event at a fixed solar longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeEvent {
    pub name: &'static str,
    pub longitude_deg: f64,
    pub policy: WindowPolicy,
}

const fn across_year(name: &'static str, longitude_deg: f64, month: u32) -> LongitudeEvent {
    LongitudeEvent {
        name,
        longitude_deg,
        policy: WindowPolicy::AcrossYearBoundary {
            month,
            pad_months: 1,
        },
    }
}

/// 土用入り, one per season.
pub const DOYO_EVENTS: [LongitudeEvent; 4] = [
    across_year("冬土用", 297.0, 1),
    across_year("春土用", 27.0, 4),
    across_year("夏土用", 117.0, 7),
    across_year("秋土用", 207.0, 10),
];

/// 入梅, sun at 80°.
pub const NYUBAI: LongitudeEvent = LongitudeEvent {
    name: "入梅",
    longitude_deg: 80.0,
    policy: WindowPolicy::NearMonth {
        month: 6,
        pad_months: 1,
    },
};

/// 半夏生, sun at 100°.
pub const HANGESHO: LongitudeEvent = LongitudeEvent {
    name: "半夏生",
    longitude_deg: 100.0,
    policy: WindowPolicy::NearMonth {
        month: 7,
        pad_months: 1,
    },
};

impl<E: Ephemeris> CalendarEngine<E> {
    /// Instants in `year` at which the sun reaches `target_deg`, one solve
    /// per policy window, year-filtered and sorted.
    ///
    /// Each window must hold at most one crossing, so year sweeps and
    /// padding of six months or more are rejected with
    /// [`SearchError::InvalidWindow`]; use
    /// [`CalendarEngine::solar_term_table`] for whole-year sweeps.
    pub fn longitude_events(
        &self,
        year: i32,
        target_deg: f64,
        policy: WindowPolicy,
    ) -> Result<Vec<Instant>, SearchError> {
        if matches!(policy, WindowPolicy::YearSweep { .. }) {
            return Err(SearchError::InvalidWindow(
                "year sweep windows can hold two crossings of one longitude",
            ));
        }
        let solver = self.solver()?;
        let mut found = Vec::new();
        for window in policy.windows(year, self.bridge())? {
            let solution = solver.solve(target_deg, window)?;
            if self.is_in_year(solution.instant, year)? {
                found.push(solution.instant);
            }
        }
        found.sort_by(Instant::total_cmp);
        Ok(found)
    }

    fn longitude_event_records(
        &self,
        year: i32,
        event: &LongitudeEvent,
    ) -> Result<Vec<EventRecord>, SearchError> {
        let instants = self.longitude_events(year, event.longitude_deg, event.policy)?;
        if instants.is_empty() {
            log::warn!("{} does not occur in {year}", event.name);
        }
        instants
            .into_iter()
            .map(|t| self.named_record(year, event.name, t))
            .collect()
    }

    /// 土用入り of the four seasons.
    pub fn doyo(&self, year: i32) -> Result<Vec<EventRecord>, SearchError> {
        let mut records = Vec::with_capacity(DOYO_EVENTS.len());
        for event in &DOYO_EVENTS {
            records.extend(self.longitude_event_records(year, event)?);
        }
        sort_chronologically(&mut records);
        Ok(records)
    }

    /// 入梅.
    pub fn nyubai(&self, year: i32) -> Result<Vec<EventRecord>, SearchError> {
        self.longitude_event_records(year, &NYUBAI)
    }

    /// 半夏生.
    pub fn hangesho(&self, year: i32) -> Result<Vec<EventRecord>, SearchError> {
        self.longitude_event_records(year, &HANGESHO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doyo_table_is_eighteen_days_before_each_season() {
        // 立春 315, 立夏 45, 立秋 135, 立冬 225; 18 days ≈ 18°.
        let starts = [315.0, 45.0, 135.0, 225.0];
        for (e, s) in DOYO_EVENTS.iter().zip(starts) {
            assert_eq!((s - e.longitude_deg + 360.0) % 360.0, 18.0);
            assert!(e.policy.validate().is_ok());
        }
    }

    #[test]
    fn single_markers_use_near_month() {
        assert!(matches!(NYUBAI.policy, WindowPolicy::NearMonth { month: 6, .. }));
        assert!(matches!(HANGESHO.policy, WindowPolicy::NearMonth { month: 7, .. }));
    }
}
