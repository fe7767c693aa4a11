//! Apparent geocentric ecliptic longitude of the sun.
//!
//! Low-precision series: geometric mean longitude, mean anomaly and
//! equation of centre, then nutation and aberration via the longitude of
//! the moon's ascending node. About 0.01° over 1900–2100.
//!
//! Source: J. Meeus, *Astronomical Algorithms* 2nd ed., Chapter 25.

use koyomi_search::normalize_360;
use koyomi_time::jd_to_centuries;

/// Apparent solar longitude in degrees [0, 360) at `jd_tt`.
pub fn apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let t2 = t * t;

    // Geometric mean longitude and mean anomaly.
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();

    // Equation of centre.
    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    // Nutation and aberration.
    let omega = (125.04 - 1934.136 * t).to_radians();
    let lambda = l0 + c - 0.00569 - 0.00478 * omega.sin();

    normalize_360(lambda)
}
