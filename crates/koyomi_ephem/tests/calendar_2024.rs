//! Calendar dates for 2024 and 2025 computed from the analytic series.
//!
//! Only events at least half an hour from local midnight are asserted by
//! date; the series are accurate to a few minutes.

use chrono::NaiveDate;
use koyomi_ephem::AnalyticEphemeris;
use koyomi_search::{CalendarEngine, EngineConfig, SolarTerm, WindowPolicy};

fn engine() -> CalendarEngine<AnalyticEphemeris> {
    CalendarEngine::new(AnalyticEphemeris::default(), EngineConfig::default()).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn date_of(records: &[koyomi_search::EventRecord], name: &str) -> NaiveDate {
    records
        .iter()
        .find(|r| r.name() == Some(name))
        .unwrap_or_else(|| panic!("{name} missing"))
        .date()
}

#[test]
fn solar_terms_2024() {
    let e = engine();
    let terms = e.solar_terms(2024).unwrap();
    assert_eq!(terms.len(), 24);
    assert_eq!(date_of(&terms, "立春"), ymd(2024, 2, 4));
    assert_eq!(date_of(&terms, "春分"), ymd(2024, 3, 20));
    assert_eq!(date_of(&terms, "夏至"), ymd(2024, 6, 21));
    assert_eq!(date_of(&terms, "秋分"), ymd(2024, 9, 22));
    assert_eq!(date_of(&terms, "冬至"), ymd(2024, 12, 21));
}

#[test]
fn geshi_by_longitude_solve_2024() {
    let e = engine();
    let found = e
        .longitude_events(
            2024,
            90.0,
            WindowPolicy::NearMonth {
                month: 6,
                pad_months: 1,
            },
        )
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(e.bridge().local_date(found[0]).unwrap(), ymd(2024, 6, 21));
}

#[test]
fn shunbun_2025_by_term_lookup() {
    let e = engine();
    let t = e.solar_term(2025, SolarTerm::Shunbun).unwrap().unwrap();
    assert_eq!(e.bridge().local_date(t).unwrap(), ymd(2025, 3, 20));
}

#[test]
fn seasonal_markers_2024() {
    let e = engine();
    let doyo = e.doyo(2024).unwrap();
    assert_eq!(doyo.len(), 4);
    assert_eq!(date_of(&doyo, "春土用"), ymd(2024, 4, 16));
    assert_eq!(date_of(&doyo, "夏土用"), ymd(2024, 7, 19));
    assert_eq!(date_of(&doyo, "秋土用"), ymd(2024, 10, 20));
    let winter = date_of(&doyo, "冬土用");
    assert!(winter == ymd(2024, 1, 17) || winter == ymd(2024, 1, 18));

    assert_eq!(date_of(&e.nyubai(2024).unwrap(), "入梅"), ymd(2024, 6, 10));
    assert_eq!(date_of(&e.hangesho(2024).unwrap(), "半夏生"), ymd(2024, 7, 1));
}

#[test]
fn shanichi_2024() {
    let s = engine().shanichi(2024).unwrap();
    assert_eq!(date_of(&s, "春社日"), ymd(2024, 3, 15));
    assert_eq!(date_of(&s, "秋社日"), ymd(2024, 9, 21));
}

#[test]
fn traditional_tanabata() {
    let e = engine();
    assert_eq!(
        date_of(&e.tanabata(2024).unwrap(), "伝統的七夕"),
        ymd(2024, 8, 10)
    );
    assert_eq!(
        date_of(&e.tanabata(2025).unwrap(), "伝統的七夕"),
        ymd(2025, 8, 29)
    );
}

#[test]
fn zassetsu_2024() {
    let z = engine().zassetsu(2024).unwrap();
    assert_eq!(date_of(&z, "節分"), ymd(2024, 2, 3));
    assert_eq!(date_of(&z, "八十八夜"), ymd(2024, 5, 1));
    assert_eq!(date_of(&z, "二百十日"), ymd(2024, 8, 31));
    let spring: Vec<_> = z
        .iter()
        .filter(|r| r.name() == Some("春彼岸"))
        .map(|r| r.date())
        .collect();
    assert_eq!(spring.first(), Some(&ymd(2024, 3, 17)));
    assert_eq!(spring.last(), Some(&ymd(2024, 3, 23)));
}

#[test]
fn year_events_2024_contains_every_family() {
    let events = engine().year_events(2024).unwrap();
    for id in [
        "2024立春",
        "2024夏土用",
        "2024入梅",
        "2024半夏生",
        "2024春社日",
        "2024伝統的七夕",
        "2024新暦七夕",
        "2024節分",
        "2024秋彼岸4日目",
        "20240101甲子日",
    ] {
        assert!(events.iter().any(|r| r.identifier() == id), "{id} missing");
    }
    assert!(events.windows(2).all(|w| w[0].instant() <= w[1].instant()));
}

#[test]
fn year_cycle_2024_is_kinoe_tatsu() {
    let entry = engine().year_cycle(2024);
    assert_eq!(entry.ordinal(), 41);
    assert_eq!(entry.to_string(), "甲辰");
}
