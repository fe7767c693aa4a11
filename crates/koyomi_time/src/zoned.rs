//! Bridge between TT instants and fixed-offset zoned calendar date-times.
//!
//! Chain: JD(TT) → JD(UTC) by subtracting a constant ΔT, then Unix time
//! → `chrono` UTC date-time → fixed offset. The offset never changes with
//! the season, so there is no ambiguity in either direction.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};

use crate::julian::{SECONDS_PER_DAY, jd_to_unix_seconds, unix_seconds_to_jd};
use crate::{Instant, TimeError};

/// A calendar date-time at a fixed UTC offset.
pub type ZonedInstant = DateTime<FixedOffset>;

/// Label format of zoned instants: `YYYY/MM/DD HH:MM:SS`.
pub const LABEL_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// UTC+9, the offset of Japan Standard Time.
pub const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Largest offset accepted by calendar zones (±18 h).
const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

/// Format a zoned instant as `YYYY/MM/DD HH:MM:SS`.
pub fn format_label(zoned: &ZonedInstant) -> String {
    zoned.format(LABEL_FORMAT).to_string()
}

/// Converts instants to and from zoned calendar date-times.
///
/// Holds ΔT (TT − UT, seconds) and the fixed UTC offset. Both are
/// configuration, never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBridge {
    delta_t_seconds: f64,
    offset: FixedOffset,
}

impl TimeBridge {
    /// Create a bridge from ΔT and a UTC offset in seconds east of Greenwich.
    pub fn new(delta_t_seconds: f64, utc_offset_seconds: i32) -> Result<Self, TimeError> {
        if !delta_t_seconds.is_finite() {
            return Err(TimeError::NonFinite);
        }
        if utc_offset_seconds.abs() > MAX_OFFSET_SECONDS {
            return Err(TimeError::InvalidOffset {
                seconds: utc_offset_seconds,
            });
        }
        let offset = FixedOffset::east_opt(utc_offset_seconds).ok_or(TimeError::InvalidOffset {
            seconds: utc_offset_seconds,
        })?;
        Ok(Self {
            delta_t_seconds,
            offset,
        })
    }

    /// Bridge fixed at UTC+9 with the given ΔT.
    pub fn jst(delta_t_seconds: f64) -> Self {
        Self {
            delta_t_seconds,
            offset: FixedOffset::east_opt(JST_OFFSET_SECONDS).unwrap_or(Utc.fix()),
        }
    }

    pub fn delta_t_seconds(&self) -> f64 {
        self.delta_t_seconds
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    fn delta_t_days(&self) -> f64 {
        self.delta_t_seconds / SECONDS_PER_DAY
    }

    /// Instant of a UTC date-time.
    pub fn from_utc(&self, utc: &DateTime<Utc>) -> Instant {
        let seconds = utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1e-9;
        Instant::from_jd_tt(unix_seconds_to_jd(seconds) + self.delta_t_days())
    }

    /// Instant of 00:00 UTC on the given calendar date.
    pub fn utc_midnight(&self, year: i32, month: u32, day: u32) -> Result<Instant, TimeError> {
        let date = calendar_date(year, month, day)?;
        let naive = midnight(date)?;
        Ok(self.from_utc(&Utc.from_utc_datetime(&naive)))
    }

    /// Instant of a wall-clock date-time at this bridge's offset.
    pub fn from_local(&self, local: &NaiveDateTime) -> Result<Instant, TimeError> {
        let zoned = self
            .offset
            .from_local_datetime(local)
            .single()
            .ok_or(TimeError::InvalidDate {
                year: local.year(),
                month: local.month(),
                day: local.day(),
            })?;
        Ok(self.from_utc(&zoned.with_timezone(&Utc)))
    }

    /// Instant of 00:00 local time on `date`.
    pub fn local_midnight(&self, date: NaiveDate) -> Result<Instant, TimeError> {
        self.from_local(&midnight(date)?)
    }

    /// UTC date-time of an instant, rounded to the millisecond.
    ///
    /// An f64 Julian Date near the present resolves only about 40 µs.
    pub fn to_utc(&self, t: Instant) -> Result<DateTime<Utc>, TimeError> {
        if !t.is_finite() {
            return Err(TimeError::NonFinite);
        }
        let out_of_range = TimeError::OutOfRange {
            jd_tt: t.as_jd_tt(),
        };
        let seconds = jd_to_unix_seconds(t.as_jd_tt() - self.delta_t_days());
        let millis = (seconds * 1e3).round();
        if millis.abs() >= i64::MAX as f64 {
            return Err(out_of_range);
        }
        let millis = millis as i64;
        let secs = millis.div_euclid(1_000);
        let nanos = (millis.rem_euclid(1_000) * 1_000_000) as u32;
        DateTime::from_timestamp(secs, nanos).ok_or(out_of_range)
    }

    /// Zoned calendar date-time of an instant.
    pub fn to_zoned(&self, t: Instant) -> Result<ZonedInstant, TimeError> {
        Ok(self.to_utc(t)?.with_timezone(&self.offset))
    }

    /// Local calendar date of an instant (time of day discarded).
    pub fn local_date(&self, t: Instant) -> Result<NaiveDate, TimeError> {
        Ok(self.to_zoned(t)?.date_naive())
    }

    /// `YYYY/MM/DD HH:MM:SS` label of an instant at this bridge's offset.
    pub fn label(&self, t: Instant) -> Result<String, TimeError> {
        Ok(format_label(&self.to_zoned(t)?))
    }
}

fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimeError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(TimeError::InvalidDate { year, month, day })
}

fn midnight(date: NaiveDate) -> Result<NaiveDateTime, TimeError> {
    date.and_hms_opt(0, 0, 0).ok_or(TimeError::InvalidDate {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNIX_EPOCH_JD;
    use chrono::Timelike;

    #[test]
    fn unix_epoch_without_delta_t() {
        let bridge = TimeBridge::new(0.0, 0).unwrap();
        let t = bridge.utc_midnight(1970, 1, 1).unwrap();
        assert!((t.as_jd_tt() - UNIX_EPOCH_JD).abs() < 1e-12);
    }

    #[test]
    fn delta_t_shifts_tt() {
        let bridge = TimeBridge::new(69.0, 0).unwrap();
        let t = bridge.utc_midnight(1970, 1, 1).unwrap();
        assert!((t.as_jd_tt() - (UNIX_EPOCH_JD + 69.0 / 86_400.0)).abs() < 1e-12);
    }

    #[test]
    fn jst_label_is_nine_hours_ahead() {
        let bridge = TimeBridge::jst(69.0);
        let t = bridge.utc_midnight(2024, 6, 20).unwrap();
        let t = t.add_days(20.0 / 24.0 + 51.0 / 1440.0);
        assert_eq!(bridge.label(t).unwrap(), "2024/06/21 05:51:00");
    }

    #[test]
    fn exact_utc_minute_labels_whole_second() {
        let bridge = TimeBridge::jst(69.0);
        let utc = Utc.with_ymd_and_hms(2024, 6, 20, 20, 51, 0).unwrap();
        let t = bridge.from_utc(&utc);
        assert_eq!(bridge.label(t).unwrap(), "2024/06/21 05:51:00");
        assert_eq!(bridge.to_utc(t).unwrap(), utc);
    }

    #[test]
    fn fractional_days_label_without_losing_a_second() {
        let bridge = TimeBridge::jst(69.184);
        let base = bridge.utc_midnight(2024, 1, 1).unwrap();
        for minute in (0..1440).step_by(7) {
            let t = base.add_days(f64::from(minute) / 1440.0);
            let zoned = bridge.to_zoned(t).unwrap();
            assert_eq!(zoned.second(), 0, "minute {minute}: {}", format_label(&zoned));
        }
    }

    #[test]
    fn local_midnight_round_trip() {
        let bridge = TimeBridge::jst(69.0);
        let date = NaiveDate::from_ymd_opt(2024, 7, 7).unwrap();
        let t = bridge.local_midnight(date).unwrap();
        let zoned = bridge.to_zoned(t).unwrap();
        assert_eq!(zoned.date_naive(), date);
        assert_eq!(zoned.hour(), 0);
        assert_eq!(zoned.minute(), 0);
        assert_eq!(zoned.second(), 0);
    }

    #[test]
    fn local_date_crosses_utc_midnight() {
        let bridge = TimeBridge::jst(0.0);
        // 2024-08-22 15:30 UTC is 2024-08-23 00:30 JST.
        let t = bridge.utc_midnight(2024, 8, 22).unwrap().add_days(15.5 / 24.0);
        let date = bridge.local_date(t).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 8, 23));
    }

    #[test]
    fn before_unix_epoch_is_supported() {
        let bridge = TimeBridge::jst(0.0);
        let t = bridge.utc_midnight(1893, 1, 1).unwrap();
        let utc = bridge.to_utc(t).unwrap();
        assert_eq!((utc.year(), utc.month(), utc.day()), (1893, 1, 1));
        assert_eq!(utc.hour(), 0);
    }

    #[test]
    fn invalid_date_rejected() {
        let bridge = TimeBridge::jst(0.0);
        assert_eq!(
            bridge.utc_midnight(2023, 2, 29),
            Err(TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn unmappable_local_time_is_invalid_date() {
        let bridge = TimeBridge::new(0.0, -9 * 3600).unwrap();
        let err = bridge.from_local(&NaiveDateTime::MAX).unwrap_err();
        assert!(matches!(err, TimeError::InvalidDate { .. }));
    }

    #[test]
    fn offset_out_of_range_rejected() {
        assert!(matches!(
            TimeBridge::new(0.0, 19 * 3600),
            Err(TimeError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn nan_instant_rejected() {
        let bridge = TimeBridge::jst(0.0);
        assert_eq!(
            bridge.to_zoned(Instant::from_jd_tt(f64::NAN)),
            Err(TimeError::NonFinite)
        );
    }
}
