//! Julian Date constants and Unix-time conversions.

/// Julian Date of J2000.0 (2000-01-01T12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Convert Unix seconds (UTC) to a Julian Date on the same scale.
pub fn unix_seconds_to_jd(seconds: f64) -> f64 {
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Convert a Julian Date to Unix seconds on the same scale.
pub fn jd_to_unix_seconds(jd: f64) -> f64 {
    (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
