//! Analytic ephemeris for the koyomi calendar engine.
//!
//! This crate provides [`AnalyticEphemeris`], which implements the
//! collaborator traits of `koyomi_search` from closed-form series:
//! - Solar longitude from the low-precision solar theory ([`solar`])
//! - Solar-term crossings by daily scanning plus bisection
//! - New moons from the mean-phase series with periodic corrections ([`lunar`])
//!
//! Accuracy is a few minutes for new moons and roughly a quarter hour for
//! solar terms, adequate for calendar dates except when an event falls
//! within minutes of local midnight.

pub mod lunar;
pub mod solar;

use koyomi_search::{
    Crossing, CrossingEnumerator, EphemerisError, LongitudeSampler, LongitudeSolver,
    LunarPhaseSource, SearchError, SignalFamily, SolverConfig,
};
use koyomi_time::{Instant, SearchWindow};

/// 1800-01-01 00:00 TT.
pub const DEFAULT_MIN_JD_TT: f64 = 2_378_496.5;
/// 2200-01-01 00:00 TT.
pub const DEFAULT_MAX_JD_TT: f64 = 2_524_593.5;

/// Coverage and scan settings for [`AnalyticEphemeris`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticConfig {
    /// Earliest supported epoch (JD TT).
    pub min_jd_tt: f64,
    /// Latest supported epoch (JD TT).
    pub max_jd_tt: f64,
    /// Sampling step when scanning for partition crossings, in days.
    pub scan_step_days: f64,
    /// Tolerances used to refine each crossing.
    pub solver: SolverConfig,
}

impl Default for AnalyticConfig {
    fn default() -> Self {
        Self {
            min_jd_tt: DEFAULT_MIN_JD_TT,
            max_jd_tt: DEFAULT_MAX_JD_TT,
            scan_step_days: 1.0,
            solver: SolverConfig::default(),
        }
    }
}

impl AnalyticConfig {
    fn validate(&self) -> Result<(), &'static str> {
        if !self.min_jd_tt.is_finite() || !self.max_jd_tt.is_finite() {
            return Err("coverage bounds must be finite");
        }
        if self.min_jd_tt >= self.max_jd_tt {
            return Err("min_jd_tt must precede max_jd_tt");
        }
        // The sun moves about 1° per day; larger steps could skip a partition.
        if !self.scan_step_days.is_finite()
            || self.scan_step_days <= 0.0
            || self.scan_step_days > 10.0
        {
            return Err("scan_step_days must be in (0, 10]");
        }
        self.solver.validate()
    }
}

/// Sun and moon positions from analytic series.
///
/// Stateless after construction; safe to share between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticEphemeris {
    config: AnalyticConfig,
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self {
            config: AnalyticConfig::default(),
        }
    }
}

impl AnalyticEphemeris {
    /// Build an ephemeris, validating `config`.
    pub fn new(config: AnalyticConfig) -> Result<Self, EphemerisError> {
        config
            .validate()
            .map_err(|msg| EphemerisError::Unavailable(format!("invalid config: {msg}")))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyticConfig {
        &self.config
    }

    fn check_range(&self, jd_tt: f64) -> Result<(), EphemerisError> {
        if jd_tt.is_finite() && jd_tt >= self.config.min_jd_tt && jd_tt <= self.config.max_jd_tt {
            Ok(())
        } else {
            Err(EphemerisError::OutOfRange { jd_tt })
        }
    }

    fn check_window(&self, window: SearchWindow) -> Result<(), EphemerisError> {
        self.check_range(window.start().as_jd_tt())?;
        self.check_range(window.end().as_jd_tt())
    }
}

impl LongitudeSampler for AnalyticEphemeris {
    fn longitude_at(&self, t: Instant) -> Result<f64, EphemerisError> {
        let jd = t.as_jd_tt();
        self.check_range(jd)?;
        Ok(solar::apparent_longitude_deg(jd))
    }
}

impl CrossingEnumerator for AnalyticEphemeris {
    fn crossings(
        &self,
        window: SearchWindow,
        family: SignalFamily,
    ) -> Result<Vec<Crossing>, EphemerisError> {
        self.check_window(window)?;
        let step = family.step_deg();
        let count = family.count();
        let solver = LongitudeSolver::new(self, self.config.solver).map_err(into_ephemeris_error)?;
        let partition = |lon: f64| ((lon / step).floor() as u8) % count;

        let end = window.end();
        let mut prev_t = window.start();
        let mut prev_idx = partition(self.longitude_at(prev_t)?);
        let mut out = Vec::new();

        while prev_t < end {
            let next_t = prev_t.add_days(self.config.scan_step_days);
            let curr_t = if next_t > end { end } else { next_t };
            let curr_idx = partition(self.longitude_at(curr_t)?);

            if curr_idx != prev_idx {
                let bracket = SearchWindow::new(prev_t, curr_t)
                    .map_err(|e| into_ephemeris_error(SearchError::from(e)))?;
                let solution = solver
                    .solve(family.boundary_deg(curr_idx), bracket)
                    .map_err(into_ephemeris_error)?;
                log::trace!("boundary {curr_idx} crossed at {}", solution.instant);
                out.push(Crossing {
                    instant: solution.instant,
                    index: curr_idx,
                });
            }

            prev_t = curr_t;
            prev_idx = curr_idx;
        }

        log::debug!("{} crossings in {}..{}", out.len(), window.start(), end);
        Ok(out)
    }
}

impl LunarPhaseSource for AnalyticEphemeris {
    fn new_moons_in(&self, window: SearchWindow) -> Result<Vec<Instant>, EphemerisError> {
        self.check_window(window)?;
        let start = window.start().as_jd_tt();
        let end = window.end().as_jd_tt();

        let mut out = Vec::new();
        let mut k = lunar::lunation_before(start);
        loop {
            let jde = lunar::new_moon_jde(k);
            if jde > end {
                break;
            }
            if jde >= start {
                out.push(Instant::from_jd_tt(jde));
            }
            k += 1;
        }
        Ok(out)
    }
}

fn into_ephemeris_error(e: SearchError) -> EphemerisError {
    match e {
        SearchError::Ephemeris(inner) => inner,
        other => EphemerisError::Unavailable(other.to_string()),
    }
}
