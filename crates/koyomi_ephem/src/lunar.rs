//! Instants of new moon from the mean-phase series.
//!
//! Mean new moon for lunation number `k` (k = 0 near 2000 Jan 6), then
//! periodic corrections in the sun's and moon's mean anomalies, the moon's
//! argument of latitude and node, and 14 planetary arguments. Accurate to
//! a few minutes over several centuries around J2000.
//!
//! Source: J. Meeus, *Astronomical Algorithms* 2nd ed., Chapter 49.

/// JDE of the mean new moon with k = 0.
pub const NEW_MOON_EPOCH_JDE: f64 = 2_451_550.097_66;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// Periodic terms: `[coeff, e_power, n_m, n_mp, n_f, n_om]`.
///
/// Argument = n_m·M + n_mp·M′ + n_f·F + n_om·Ω; amplitude multiplied by
/// `E^e_power`.
#[rustfmt::skip]
static PERIODIC_TERMS: [[f64; 6]; 25] = [
    // coeff      E   M    M'   F    Ω
    [-0.40720,   0.0, 0.0, 1.0, 0.0, 0.0],
    [ 0.17241,   1.0, 1.0, 0.0, 0.0, 0.0],
    [ 0.01608,   0.0, 0.0, 2.0, 0.0, 0.0],
    [ 0.01039,   0.0, 0.0, 0.0, 2.0, 0.0],
    [ 0.00739,   1.0,-1.0, 1.0, 0.0, 0.0],
    [-0.00514,   1.0, 1.0, 1.0, 0.0, 0.0],
    [ 0.00208,   2.0, 2.0, 0.0, 0.0, 0.0],
    [-0.00111,   0.0, 0.0, 1.0,-2.0, 0.0],
    [-0.00057,   0.0, 0.0, 1.0, 2.0, 0.0],
    [ 0.00056,   1.0, 1.0, 2.0, 0.0, 0.0],
    [-0.00042,   0.0, 0.0, 3.0, 0.0, 0.0],
    [ 0.00042,   1.0, 1.0, 0.0, 2.0, 0.0],
    [ 0.00038,   1.0, 1.0, 0.0,-2.0, 0.0],
    [-0.00024,   1.0,-1.0, 2.0, 0.0, 0.0],
    [-0.00017,   0.0, 0.0, 0.0, 0.0, 1.0],
    [-0.00007,   0.0, 2.0, 1.0, 0.0, 0.0],
    [ 0.00004,   0.0, 0.0, 2.0,-2.0, 0.0],
    [ 0.00004,   0.0, 3.0, 0.0, 0.0, 0.0],
    [ 0.00003,   0.0, 1.0, 1.0,-2.0, 0.0],
    [ 0.00003,   0.0, 0.0, 2.0, 2.0, 0.0],
    [-0.00003,   0.0, 1.0, 1.0, 2.0, 0.0],
    [ 0.00003,   0.0,-1.0, 1.0, 2.0, 0.0],
    [-0.00002,   0.0,-1.0, 1.0,-2.0, 0.0],
    [-0.00002,   0.0, 1.0, 3.0, 0.0, 0.0],
    [ 0.00002,   0.0, 0.0, 4.0, 0.0, 0.0],
];

/// Planetary arguments: `[coeff, a0, a_k]`, argument = a0 + a_k·k in degrees.
/// The first argument also carries −0.009173·T².
#[rustfmt::skip]
static PLANETARY_TERMS: [[f64; 3]; 14] = [
    [0.000325, 299.77,  0.107408],
    [0.000165, 251.88,  0.016321],
    [0.000164, 251.83, 26.651886],
    [0.000126, 349.42, 36.412478],
    [0.000110,  84.66, 18.206239],
    [0.000062, 141.74, 53.303771],
    [0.000060, 207.14,  2.453732],
    [0.000056, 154.84,  7.306860],
    [0.000047,  34.52, 27.261239],
    [0.000042, 207.19,  0.121824],
    [0.000040, 291.34,  1.844379],
    [0.000037, 161.72, 24.198154],
    [0.000035, 239.56, 25.513099],
    [0.000023, 331.55,  3.592518],
];

/// Lunation number whose mean new moon precedes `jd`, minus one.
pub fn lunation_before(jd: f64) -> i64 {
    ((jd - NEW_MOON_EPOCH_JDE) / SYNODIC_MONTH_DAYS).floor() as i64 - 1
}

/// JDE of the true new moon of lunation `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = NEW_MOON_EPOCH_JDE + SYNODIC_MONTH_DAYS * k + 0.000_154_37 * t2
        - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = 2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3;
    let mp = 201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4;
    let f = 160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4;
    let om = 124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3;

    let periodic: f64 = PERIODIC_TERMS
        .iter()
        .map(|[coeff, ep, nm, nmp, nf, nom]| {
            let arg = (nm * m + nmp * mp + nf * f + nom * om).to_radians();
            coeff * e.powi(*ep as i32) * arg.sin()
        })
        .sum();

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .enumerate()
        .map(|(i, [coeff, a0, ak])| {
            let mut arg = a0 + ak * k;
            if i == 0 {
                arg -= 0.009_173 * t2;
            }
            coeff * arg.to_radians().sin()
        })
        .sum();

    mean + periodic + planetary
}
