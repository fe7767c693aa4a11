//! Bisection root finder for a rising angular signal.
//!
//! Finds the instant at which the sun's ecliptic longitude reaches a target
//! value inside a window. Each sample is unwrapped onto the branch
//! (target − 180°, target + 180°] before comparison, so a target near 0°
//! behaves the same as any other.
//!
//! Loop: stop early when the sample is within `angle_tolerance_deg` of the
//! target, otherwise keep halving while the bracket is wider than
//! `time_tolerance_days`. The answer is the midpoint of the final bracket.

use koyomi_time::{Instant, SearchWindow};
use serde::{Deserialize, Serialize};

use crate::angle::{circular_diff, is_rising_crossing, normalize_360};
use crate::ephemeris::LongitudeSampler;
use crate::error::SearchError;

/// Tolerances and limits for [`LongitudeSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Stop when the bracket is at most this wide, in days (default 0.001).
    pub time_tolerance_days: f64,
    /// Stop when a sample lies this close to the target, in degrees (default 0.001).
    pub angle_tolerance_deg: f64,
    /// Maximum bisection steps (default 64).
    pub max_iterations: u32,
    /// Sample both window ends and reject windows without a rising crossing.
    pub verify_bracket: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_tolerance_days: 0.001,
            angle_tolerance_deg: 0.001,
            max_iterations: 64,
            verify_bracket: true,
        }
    }
}

impl SolverConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.time_tolerance_days.is_finite() || self.time_tolerance_days <= 0.0 {
            return Err("time_tolerance_days must be positive");
        }
        if !self.angle_tolerance_deg.is_finite() || self.angle_tolerance_deg <= 0.0 {
            return Err("angle_tolerance_deg must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}

/// Result of one solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeSolution {
    /// Instant at which the longitude reaches the target.
    pub instant: Instant,
    /// Bisection steps taken.
    pub iterations: u32,
    /// Signed distance of the sample closest to the answer, in degrees.
    pub residual_deg: f64,
}

/// Locates target-longitude crossings using a borrowed sampler.
pub struct LongitudeSolver<'a, S: LongitudeSampler + ?Sized> {
    sampler: &'a S,
    config: SolverConfig,
}

impl<'a, S: LongitudeSampler + ?Sized> LongitudeSolver<'a, S> {
    /// Create a solver, validating `config`.
    pub fn new(sampler: &'a S, config: SolverConfig) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        Ok(Self { sampler, config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn diff_at(&self, t: Instant, target: f64) -> Result<f64, SearchError> {
        let lon = self.sampler.longitude_at(t)?;
        Ok(circular_diff(lon, target))
    }

    /// Find when the longitude reaches `target_deg` inside `window`.
    pub fn solve(
        &self,
        target_deg: f64,
        window: SearchWindow,
    ) -> Result<LongitudeSolution, SearchError> {
        if !target_deg.is_finite() {
            return Err(SearchError::InvalidConfig("target longitude must be finite"));
        }
        let target = normalize_360(target_deg);
        let tol_time = self.config.time_tolerance_days;
        let tol_angle = self.config.angle_tolerance_deg;

        let mut start = window.start();
        let mut end = window.end();

        if self.config.verify_bracket {
            let d_start = self.diff_at(start, target)?;
            if d_start.abs() < tol_angle {
                return Ok(LongitudeSolution {
                    instant: start,
                    iterations: 0,
                    residual_deg: d_start,
                });
            }
            let d_end = self.diff_at(end, target)?;
            if d_end.abs() < tol_angle {
                return Ok(LongitudeSolution {
                    instant: end,
                    iterations: 0,
                    residual_deg: d_end,
                });
            }
            if !is_rising_crossing(d_start, d_end) {
                return Err(SearchError::NotBracketed {
                    target_deg: target,
                    start_diff_deg: d_start,
                    end_diff_deg: d_end,
                });
            }
        }

        let mut iterations = 0u32;
        let mut residual = f64::NAN;
        while end - start > tol_time {
            if iterations >= self.config.max_iterations {
                return Err(SearchError::NoConvergence {
                    iterations,
                    width_days: end - start,
                });
            }
            iterations += 1;

            let mid = start.midpoint(end);
            let d = self.diff_at(mid, target)?;
            residual = d;
            log::trace!(
                "bisect {target:.3}°: iter {iterations} mid {mid} diff {d:+.6}° width {:.6} d",
                end - start
            );

            if d.abs() < tol_angle {
                log::debug!("longitude {target:.3}° reached at {mid} after {iterations} iterations");
                return Ok(LongitudeSolution {
                    instant: mid,
                    iterations,
                    residual_deg: d,
                });
            }
            if d < 0.0 {
                start = mid;
            } else {
                end = mid;
            }
        }

        let instant = start.midpoint(end);
        if residual.is_nan() {
            residual = self.diff_at(instant, target)?;
        }
        log::debug!("longitude {target:.3}° bracketed at {instant} after {iterations} iterations");
        Ok(LongitudeSolution {
            instant,
            iterations,
            residual_deg: residual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::EphemerisError;

    /// Longitude rising `rate` degrees per day, zero at `jd0`.
    struct Linear {
        jd0: f64,
        rate: f64,
    }

    impl LongitudeSampler for Linear {
        fn longitude_at(&self, t: Instant) -> Result<f64, EphemerisError> {
            Ok(normalize_360((t.as_jd_tt() - self.jd0) * self.rate))
        }
    }

    struct Failing;

    impl LongitudeSampler for Failing {
        fn longitude_at(&self, t: Instant) -> Result<f64, EphemerisError> {
            Err(EphemerisError::OutOfRange {
                jd_tt: t.as_jd_tt(),
            })
        }
    }

    fn window(a: f64, b: f64) -> SearchWindow {
        SearchWindow::new(Instant::from_jd_tt(a), Instant::from_jd_tt(b)).unwrap()
    }

    #[test]
    fn default_config_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_tolerance() {
        let cfg = SolverConfig {
            time_tolerance_days: 0.0,
            ..SolverConfig::default()
        };
        let s = Linear {
            jd0: 0.0,
            rate: 1.0,
        };
        assert!(matches!(
            LongitudeSolver::new(&s, cfg),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn linear_signal_converges() {
        let s = Linear {
            jd0: 1000.0,
            rate: 0.9856,
        };
        let solver = LongitudeSolver::new(&s, SolverConfig::default()).unwrap();
        let sol = solver.solve(90.0, window(1050.0, 1120.0)).unwrap();
        let expected = 1000.0 + 90.0 / 0.9856;
        assert!((sol.instant.as_jd_tt() - expected).abs() < 0.002);
        assert!(sol.iterations > 0);
    }

    #[test]
    fn wraparound_target_zero() {
        // Signal passes 359° → 0° → 1° around jd 360.
        let s = Linear {
            jd0: 0.0,
            rate: 1.0,
        };
        let solver = LongitudeSolver::new(&s, SolverConfig::default()).unwrap();
        let sol = solver.solve(0.0, window(355.0, 365.0)).unwrap();
        assert!((sol.instant.as_jd_tt() - 360.0).abs() < 0.002);
        let sol = solver.solve(360.0, window(355.0, 365.0)).unwrap();
        assert!((sol.instant.as_jd_tt() - 360.0).abs() < 0.002);
    }

    #[test]
    fn not_bracketed_is_reported() {
        let s = Linear {
            jd0: 0.0,
            rate: 1.0,
        };
        let solver = LongitudeSolver::new(&s, SolverConfig::default()).unwrap();
        let err = solver.solve(90.0, window(10.0, 20.0)).unwrap_err();
        assert!(matches!(err, SearchError::NotBracketed { .. }));
    }

    #[test]
    fn endpoint_on_target_returned() {
        let s = Linear {
            jd0: 0.0,
            rate: 1.0,
        };
        let solver = LongitudeSolver::new(&s, SolverConfig::default()).unwrap();
        let sol = solver.solve(50.0, window(50.0, 60.0)).unwrap();
        assert_eq!(sol.instant.as_jd_tt(), 50.0);
        assert_eq!(sol.iterations, 0);
    }

    #[test]
    fn iteration_cap_reports_no_convergence() {
        let s = Linear {
            jd0: 0.0,
            rate: 1.0,
        };
        let cfg = SolverConfig {
            time_tolerance_days: 1e-9,
            angle_tolerance_deg: 1e-12,
            max_iterations: 3,
            verify_bracket: true,
        };
        let solver = LongitudeSolver::new(&s, cfg).unwrap();
        let err = solver.solve(45.3, window(0.0, 100.0)).unwrap_err();
        match err {
            SearchError::NoConvergence {
                iterations,
                width_days,
            } => {
                assert_eq!(iterations, 3);
                assert!((width_days - 12.5).abs() < 1e-9);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unverified_solve_skips_bracket_check() {
        let s = Linear {
            jd0: 0.0,
            rate: 1.0,
        };
        let cfg = SolverConfig {
            verify_bracket: false,
            ..SolverConfig::default()
        };
        let solver = LongitudeSolver::new(&s, cfg).unwrap();
        // Target outside the window: bisection drifts to the nearer edge.
        let sol = solver.solve(90.0, window(10.0, 20.0)).unwrap();
        assert!((sol.instant.as_jd_tt() - 20.0).abs() < 0.002);
    }

    #[test]
    fn sampler_failure_propagates() {
        let solver = LongitudeSolver::new(&Failing, SolverConfig::default()).unwrap();
        let err = solver.solve(10.0, window(0.0, 20.0)).unwrap_err();
        assert!(matches!(err, SearchError::Ephemeris(_)));
    }

    #[test]
    fn non_finite_target_rejected() {
        let s = Linear {
            jd0: 0.0,
            rate: 1.0,
        };
        let solver = LongitudeSolver::new(&s, SolverConfig::default()).unwrap();
        assert!(solver.solve(f64::NAN, window(0.0, 20.0)).is_err());
    }
}
