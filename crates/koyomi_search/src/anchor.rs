//! Anchor resolution: choose one candidate relative to a reference date.
//!
//! Candidates and anchor are compared by local calendar date only. Time
//! of day never influences the choice.

use chrono::NaiveDate;
use koyomi_time::{Instant, TimeBridge};

use crate::error::SearchError;

/// Ordering constraint between the chosen candidate and the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorMode {
    /// Latest candidate whose date is on or before the anchor date.
    BeforeOrEqual,
    /// Candidate with the smallest absolute day difference, at most
    /// `within_days` away. Ties go to the earlier date.
    Nearest { within_days: u32 },
}

/// Pick one candidate by its date. `date_of` extracts the comparison date.
///
/// Returns `None` when no candidate satisfies the mode. Among candidates
/// sharing the winning date, the first one in iteration order is kept.
pub fn resolve_by_date<T, I, F>(
    candidates: I,
    anchor: NaiveDate,
    mode: AnchorMode,
    date_of: F,
) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> NaiveDate,
{
    let mut best: Option<(NaiveDate, T)> = None;
    for c in candidates {
        let d = date_of(&c);
        let better = match mode {
            AnchorMode::BeforeOrEqual => {
                d <= anchor && best.as_ref().is_none_or(|(bd, _)| d > *bd)
            }
            AnchorMode::Nearest { within_days } => {
                let gap = (d - anchor).num_days().unsigned_abs();
                gap <= u64::from(within_days)
                    && best.as_ref().is_none_or(|(bd, _)| {
                        let best_gap = (*bd - anchor).num_days().unsigned_abs();
                        gap < best_gap || (gap == best_gap && d < *bd)
                    })
            }
        };
        if better {
            best = Some((d, c));
        }
    }
    best.map(|(_, c)| c)
}

/// Pick one date.
pub fn resolve_dates(
    candidates: &[NaiveDate],
    anchor: NaiveDate,
    mode: AnchorMode,
) -> Option<NaiveDate> {
    resolve_by_date(candidates.iter().copied(), anchor, mode, |d| *d)
}

/// Pick one instant, comparing local calendar dates under `bridge`.
pub fn resolve_instants(
    candidates: &[Instant],
    anchor: Instant,
    mode: AnchorMode,
    bridge: &TimeBridge,
) -> Result<Option<Instant>, SearchError> {
    let anchor_date = bridge.local_date(anchor)?;
    let dated = candidates
        .iter()
        .map(|t| Ok((bridge.local_date(*t)?, *t)))
        .collect::<Result<Vec<_>, SearchError>>()?;
    Ok(resolve_by_date(dated, anchor_date, mode, |(d, _)| *d).map(|(_, t)| t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn before_or_equal_picks_latest_prior() {
        let c = [ymd(2024, 7, 10), ymd(2024, 7, 25)];
        assert_eq!(
            resolve_dates(&c, ymd(2024, 8, 1), AnchorMode::BeforeOrEqual),
            Some(ymd(2024, 7, 25))
        );
    }

    #[test]
    fn before_or_equal_accepts_same_day() {
        let c = [ymd(2024, 7, 10), ymd(2024, 8, 1), ymd(2024, 8, 20)];
        assert_eq!(
            resolve_dates(&c, ymd(2024, 8, 1), AnchorMode::BeforeOrEqual),
            Some(ymd(2024, 8, 1))
        );
    }

    #[test]
    fn before_or_equal_absent() {
        let c = [ymd(2024, 8, 2)];
        assert_eq!(resolve_dates(&c, ymd(2024, 8, 1), AnchorMode::BeforeOrEqual), None);
        assert_eq!(resolve_dates(&[], ymd(2024, 8, 1), AnchorMode::BeforeOrEqual), None);
    }

    #[test]
    fn nearest_either_side() {
        let anchor = ymd(2024, 3, 20);
        let c: Vec<_> = [-5i64, 3, 10]
            .iter()
            .map(|&k| anchor + chrono::Duration::days(k))
            .collect();
        assert_eq!(
            resolve_dates(&c, anchor, AnchorMode::Nearest { within_days: 15 }),
            Some(ymd(2024, 3, 23))
        );
    }

    #[test]
    fn nearest_tie_goes_to_earlier_in_any_order() {
        let anchor = ymd(2024, 3, 20);
        let a = ymd(2024, 3, 15);
        let b = ymd(2024, 3, 25);
        let mode = AnchorMode::Nearest { within_days: 15 };
        assert_eq!(resolve_dates(&[a, b], anchor, mode), Some(a));
        assert_eq!(resolve_dates(&[b, a], anchor, mode), Some(a));
    }

    #[test]
    fn nearest_respects_limit() {
        let anchor = ymd(2024, 3, 20);
        let c = [ymd(2024, 4, 20)];
        assert_eq!(resolve_dates(&c, anchor, AnchorMode::Nearest { within_days: 15 }), None);
    }

    #[test]
    fn instants_compare_by_local_date() {
        let bridge = TimeBridge::jst(0.0);
        // Anchor 2024-08-22 23:00 JST; candidate 2024-08-22 01:00 JST is the same date.
        let anchor = bridge.utc_midnight(2024, 8, 22).unwrap().add_days(14.0 / 24.0);
        let same_day = bridge.utc_midnight(2024, 8, 21).unwrap().add_days(16.0 / 24.0);
        let next_day = bridge.utc_midnight(2024, 8, 22).unwrap().add_days(16.0 / 24.0);
        let got = resolve_instants(&[same_day, next_day], anchor, AnchorMode::BeforeOrEqual, &bridge)
            .unwrap();
        assert_eq!(got, Some(same_day));
    }
}
