//! Circular angle arithmetic on ecliptic longitudes.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to (-180, +180] degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Signed circular distance from `target` to `a`, in (-180, +180].
///
/// Antisymmetric except at exactly 180° apart, where both directions
/// report +180.
pub fn circular_diff(a: f64, target: f64) -> f64 {
    normalize_to_pm180(a - target)
}

/// Express `sample` on the branch (target − 180, target + 180].
///
/// A rising signal read near 359° and compared against 1° becomes −1°,
/// so "below target" keeps its meaning across the 0° seam.
pub fn unwrap_near(sample: f64, target: f64) -> f64 {
    target + circular_diff(sample, target)
}

/// Whether two signed distances straddle the target going upwards.
///
/// A jump from about +180 to about −180 also changes sign but is the far
/// side of the circle, not a crossing.
pub fn is_rising_crossing(diff_start: f64, diff_end: f64) -> bool {
    diff_start < 0.0 && diff_end > 0.0 && (diff_end - diff_start) < 270.0
}
