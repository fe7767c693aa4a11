use criterion::{Criterion, black_box, criterion_group, criterion_main};
use koyomi_search::{
    CycleIndex, EphemerisError, LongitudeSampler, LongitudeSolver, SolverConfig, normalize_360,
};
use koyomi_time::{Instant, SearchWindow};

struct Linear;

impl LongitudeSampler for Linear {
    fn longitude_at(&self, t: Instant) -> Result<f64, EphemerisError> {
        Ok(normalize_360((t.as_jd_tt() - 2_460_389.5) * 360.0 / 365.2422))
    }
}

fn solver_bench(c: &mut Criterion) {
    let solver = LongitudeSolver::new(&Linear, SolverConfig::default()).expect("valid config");
    let window = SearchWindow::new(
        Instant::from_jd_tt(2_460_431.5),
        Instant::from_jd_tt(2_460_492.5),
    )
    .expect("valid window");

    let mut group = c.benchmark_group("solver");
    group.bench_function("solve_90deg_two_months", |b| {
        b.iter(|| solver.solve(black_box(90.0), black_box(window)).expect("should converge"))
    });
    group.finish();
}

fn cycle_bench(c: &mut Criterion) {
    let idx = CycleIndex::default();
    let first = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let last = chrono::NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date");
    c.bench_function("cycle_dates_matching_year", |b| {
        b.iter(|| idx.dates_matching(black_box(first), black_box(last), |e| e.stem() == 4))
    });
}

criterion_group!(benches, solver_bench, cycle_bench);
criterion_main!(benches);
