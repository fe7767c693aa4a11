//! Free functions over the global calendar.
//!
//! Each returns [`KoyomiError::NotInitialized`] until [`crate::init`] has
//! been called.

use chrono::NaiveDate;
use koyomi_search::{CycleEntry, EventRecord};

use crate::error::KoyomiError;
use crate::global::koyomi;

/// The 24 solar terms of `year`.
pub fn solar_terms(year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
    koyomi()?.solar_terms(year)
}

/// 土用入り of the four seasons.
pub fn doyo(year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
    koyomi()?.doyo(year)
}

/// 入梅.
pub fn nyubai(year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
    koyomi()?.nyubai(year)
}

/// 半夏生.
pub fn hangesho(year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
    koyomi()?.hangesho(year)
}

/// 春社日 and 秋社日.
pub fn shanichi(year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
    koyomi()?.shanichi(year)
}

/// 伝統的七夕 and 新暦七夕.
pub fn tanabata(year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
    koyomi()?.tanabata(year)
}

/// 節分, 彼岸, 八十八夜 and 二百十日.
pub fn zassetsu(year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
    koyomi()?.zassetsu(year)
}

/// Dates of `year` whose cycle ordinal (1..=60) is in `ordinals`.
pub fn cycle_days(year: i32, ordinals: &[u8]) -> Result<Vec<EventRecord>, KoyomiError> {
    koyomi()?.cycle_days(year, ordinals)
}

/// Cycle entry of a year.
pub fn year_cycle(year: i32) -> Result<CycleEntry, KoyomiError> {
    Ok(koyomi()?.year_cycle(year))
}

/// Cycle entry of a date.
pub fn day_cycle(date: NaiveDate) -> Result<CycleEntry, KoyomiError> {
    Ok(koyomi()?.day_cycle(date))
}

/// Every event of `year`, sorted.
pub fn year_events(year: i32) -> Result<Vec<EventRecord>, KoyomiError> {
    koyomi()?.year_events(year)
}
