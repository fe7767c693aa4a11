//! Algebraic properties of circular distance, the cycle index and the solver.

use chrono::{Days, NaiveDate};
use koyomi_search::{
    CycleIndex, EphemerisError, LongitudeSampler, LongitudeSolver, SolverConfig, circular_diff,
    normalize_360, unwrap_near,
};
use koyomi_time::{Instant, SearchWindow};
use proptest::prelude::*;

fn angle_strategy() -> impl Strategy<Value = f64> {
    -720.0..720.0f64
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (-200_000i64..200_000).prop_map(|k| {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        if k >= 0 {
            base.checked_add_days(Days::new(k as u64)).unwrap()
        } else {
            base.checked_sub_days(Days::new((-k) as u64)).unwrap()
        }
    })
}

struct Linear {
    jd0: f64,
    rate: f64,
}

impl LongitudeSampler for Linear {
    fn longitude_at(&self, t: Instant) -> Result<f64, EphemerisError> {
        Ok(normalize_360((t.as_jd_tt() - self.jd0) * self.rate))
    }
}

proptest! {
    #[test]
    fn diff_is_in_half_open_range(a in angle_strategy(), b in angle_strategy()) {
        let d = circular_diff(a, b);
        prop_assert!(d > -180.0 && d <= 180.0);
    }

    #[test]
    fn diff_is_antisymmetric_off_the_antipode(a in angle_strategy(), b in angle_strategy()) {
        let d = circular_diff(a, b);
        prop_assume!((d.abs() - 180.0).abs() > 1e-9);
        prop_assert!((d + circular_diff(b, a)).abs() < 1e-9);
    }

    #[test]
    fn unwrapped_sample_is_within_half_turn(s in 0.0..360.0f64, t in 0.0..360.0f64) {
        let u = unwrap_near(s, t);
        prop_assert!(u > t - 180.0 && u <= t + 180.0 + 1e-9);
        prop_assert!((normalize_360(u) - s).abs() < 1e-9 || (normalize_360(u) - s).abs() > 359.0);
    }

    #[test]
    fn day_cycle_period_is_sixty(d in date_strategy()) {
        let idx = CycleIndex::default();
        let later = d.checked_add_days(Days::new(60)).unwrap();
        prop_assert_eq!(idx.for_date(d), idx.for_date(later));
        let next = d.checked_add_days(Days::new(1)).unwrap();
        prop_assert_eq!(idx.for_date(next).ordinal() % 60, (idx.for_date(d).ordinal() + 1) % 60);
    }

    #[test]
    fn year_stem_and_branch_periods(y in -3000i32..3000) {
        let idx = CycleIndex::default();
        let e = idx.for_year(y);
        prop_assert_eq!(e.stem(), idx.for_year(y + 10).stem());
        prop_assert_eq!(e.branch(), idx.for_year(y + 12).branch());
        prop_assert_eq!(i32::from(e.stem()), (y + 6).rem_euclid(10));
        prop_assert_eq!(i32::from(e.branch()), (y + 8).rem_euclid(12));
    }

    #[test]
    fn solver_converges_on_linear_signal(
        jd0 in 2_400_000.0..2_500_000.0f64,
        target in 0.0..360.0f64,
        rate in 0.5..1.5f64,
    ) {
        let s = Linear { jd0, rate };
        let config = SolverConfig::default();
        let solver = LongitudeSolver::new(&s, config).unwrap();
        let t_star = jd0 + target / rate;
        let window = SearchWindow::new(
            Instant::from_jd_tt(t_star - 20.0),
            Instant::from_jd_tt(t_star + 25.0),
        )
        .unwrap();
        let sol = solver.solve(target, window).unwrap();
        prop_assert!((sol.instant.as_jd_tt() - t_star).abs() < 0.002);
        let reached = s.longitude_at(sol.instant).unwrap();
        prop_assert!(circular_diff(reached, target).abs() < config.angle_tolerance_deg);
    }
}
