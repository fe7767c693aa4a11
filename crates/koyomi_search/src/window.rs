//! Declarative search-window selection per event family.
//!
//! Window bounds are 00:00 UTC on the first of a month. Results found in a
//! window are always post-filtered to the requested zoned calendar year by
//! the caller; the policy only makes sure every occurrence in that year is
//! inside exactly one window.

use koyomi_time::{SearchWindow, TimeBridge};

use crate::error::SearchError;

const YEAR_OUT_OF_RANGE: SearchError = SearchError::InvalidWindow("year outside supported range");

/// How to choose search windows for a target year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowPolicy {
    /// One window covering the calendar year padded by `pad_months` on each
    /// side. Handed to the discrete crossing enumerator.
    YearSweep { pad_months: u32 },
    /// One window `[month − pad, month + pad]` of the target year.
    NearMonth { month: u32, pad_months: u32 },
    /// `NearMonth` windows for the previous, target and next year. Used when
    /// the target longitude falls close to the new year, so the occurrence
    /// belonging to the target year may sit in a neighbouring year's window.
    AcrossYearBoundary { month: u32, pad_months: u32 },
}

impl WindowPolicy {
    /// Validate month and padding.
    pub fn validate(&self) -> Result<(), &'static str> {
        match *self {
            Self::YearSweep { pad_months } => {
                if pad_months > 12 {
                    return Err("year sweep padding must be at most 12 months");
                }
            }
            // A window of a year or more can hold the same longitude twice.
            Self::NearMonth { month, pad_months } => {
                check_month(month)?;
                if pad_months == 0 || 2 * pad_months >= 12 {
                    return Err("near-month padding must be 1..=5 months");
                }
            }
            Self::AcrossYearBoundary { month, pad_months } => {
                check_month(month)?;
                if pad_months == 0 || 2 * pad_months >= 12 {
                    return Err("across-year padding must be 1..=5 months");
                }
            }
        }
        Ok(())
    }

    /// Search windows for `year`, in time order.
    pub fn windows(
        &self,
        year: i32,
        bridge: &TimeBridge,
    ) -> Result<Vec<SearchWindow>, SearchError> {
        self.validate().map_err(SearchError::InvalidWindow)?;
        let windows = match *self {
            Self::YearSweep { pad_months } => {
                let pad = pad_months as i32;
                vec![month_span(year, 1, -pad, 12 + pad, bridge)?]
            }
            Self::NearMonth { month, pad_months } => {
                vec![near_month(year, month, pad_months, bridge)?]
            }
            Self::AcrossYearBoundary { month, pad_months } => {
                let first = year.checked_sub(1).ok_or(YEAR_OUT_OF_RANGE)?;
                let last = year.checked_add(1).ok_or(YEAR_OUT_OF_RANGE)?;
                (first..=last)
                    .map(|y| near_month(y, month, pad_months, bridge))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        for w in &windows {
            log::debug!("window for {year}: {} .. {}", w.start(), w.end());
        }
        Ok(windows)
    }
}

fn check_month(month: u32) -> Result<(), &'static str> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err("month must be 1..=12")
    }
}

fn near_month(
    year: i32,
    month: u32,
    pad_months: u32,
    bridge: &TimeBridge,
) -> Result<SearchWindow, SearchError> {
    let pad = pad_months as i32;
    month_span(year, month, -pad, pad, bridge)
}

/// Window from the first of `month + start_offset` to the first of
/// `month + end_offset`, offsets in months relative to `(year, month)`.
fn month_span(
    year: i32,
    month: u32,
    start_offset: i32,
    end_offset: i32,
    bridge: &TimeBridge,
) -> Result<SearchWindow, SearchError> {
    let (sy, sm) = shift_month(year, month, start_offset).ok_or(YEAR_OUT_OF_RANGE)?;
    let (ey, em) = shift_month(year, month, end_offset).ok_or(YEAR_OUT_OF_RANGE)?;
    let start = bridge.utc_midnight(sy, sm, 1)?;
    let end = bridge.utc_midnight(ey, em, 1)?;
    Ok(SearchWindow::new(start, end)?)
}

/// Add `delta` months to `(year, month)`, carrying into the year.
///
/// `None` when the resulting year does not fit in `i32`.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Option<(i32, u32)> {
    let total = i64::from(year) * 12 + (i64::from(month) - 1) + i64::from(delta);
    let y = i32::try_from(total.div_euclid(12)).ok()?;
    Some((y, total.rem_euclid(12) as u32 + 1))
}
