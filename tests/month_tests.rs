use chrono::{NaiveDate, NaiveTime};
use shiftcal::core::codes::{CodeEdit, CodeLogic, canonical_code};
use shiftcal::core::engine::EngineRules;
use shiftcal::core::month::{DayEdit, MonthLogic};
use shiftcal::db::pool::DbPool;
use shiftcal::db::queries;
use shiftcal::errors::AppError;
use shiftcal::models::computed_day::DayCategory;
use shiftcal::models::month_key::MonthKey;

mod common;
use common::setup_test_db;

fn open(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    DbPool::open(&db_path).expect("open db")
}

fn t(s: &str) -> Option<NaiveTime> {
    Some(NaiveTime::parse_from_str(s, "%H:%M").unwrap())
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn codes(raw: &str) -> DayEdit {
    DayEdit {
        codes: Some(raw.to_string()),
        ..DayEdit::default()
    }
}

fn add_early(pool: &mut DbPool) {
    let edit = CodeEdit {
        start: t("08:00"),
        end: t("16:00"),
        break_minutes: Some(60),
        label: Some("Early".to_string()),
        variable: false,
    };
    CodeLogic::set(pool, "Vroeg", &edit).expect("set code");
}

#[test]
fn test_default_codes_are_seeded() {
    let pool = open("seeded_codes");
    let reg = CodeLogic::registry(&pool).expect("registry");

    let bijs = reg.get("bijs").expect("bijs seeded");
    assert!(bijs.start.is_none() && bijs.end.is_none());
    assert!(reg.get("fdrecup").is_some());
}

#[test]
fn test_month_is_created_once_in_date_order() {
    let mut pool = open("month_created_once");
    let feb = MonthKey::new(2024, 2).unwrap();

    let records = MonthLogic::ensure_month(&mut pool, feb).expect("ensure");
    assert_eq!(records.len(), 29);
    assert_eq!(records[0].date, d(2024, 2, 1));
    assert_eq!(records[28].date, d(2024, 2, 29));
    assert!(records.windows(2).all(|w| w[0].date < w[1].date));

    MonthLogic::edit_day(&mut pool, d(2024, 2, 10), &codes("x"), &EngineRules::default())
        .expect("edit");

    // second access keeps the edit
    let again = MonthLogic::ensure_month(&mut pool, feb).expect("ensure");
    assert_eq!(again.len(), 29);
    assert_eq!(again[9].codes.to_string(), "x");
}

#[test]
fn test_edit_day_stores_normalized_codes() {
    let mut pool = open("edit_day_normalized");
    let rules = EngineRules::default();

    let rec = MonthLogic::edit_day(&mut pool, d(2025, 5, 2), &codes(" Vroeg, BIJS "), &rules)
        .expect("edit");
    assert_eq!(rec.codes.to_string(), "vroeg+bijs");

    let stored = queries::load_day(&pool.conn, d(2025, 5, 2))
        .expect("load")
        .expect("row");
    assert_eq!(stored.codes.to_string(), "vroeg+bijs");

    // untouched fields are kept
    let edit = DayEdit {
        overtime_minutes: Some(45),
        ..DayEdit::default()
    };
    let rec = MonthLogic::edit_day(&mut pool, d(2025, 5, 2), &edit, &rules).expect("edit");
    assert_eq!(rec.codes.to_string(), "vroeg+bijs");
    assert_eq!(rec.overtime_minutes, 45);
}

#[test]
fn test_negative_training_hours_rejected() {
    let mut pool = open("negative_training");
    let edit = DayEdit {
        training_hours: Some(-1.0),
        ..DayEdit::default()
    };

    let res = MonthLogic::edit_day(&mut pool, d(2025, 5, 3), &edit, &EngineRules::default());
    assert!(matches!(res, Err(AppError::InvalidNumber(_))));
}

#[test]
fn test_report_is_cached_until_a_day_changes() {
    let mut pool = open("report_cache_day");
    let rules = EngineRules::default();
    let may = MonthKey::new(2025, 5).unwrap();
    add_early(&mut pool);

    MonthLogic::edit_day(&mut pool, d(2025, 5, 5), &codes("vroeg"), &rules).expect("edit");

    let first = MonthLogic::report(&mut pool, may, &rules, false).expect("report");
    assert!(!first.from_cache);
    assert_eq!(first.report.summary.total_hours, 7.0);

    let second = MonthLogic::report(&mut pool, may, &rules, false).expect("report");
    assert!(second.from_cache);
    assert_eq!(second.report, first.report);

    MonthLogic::edit_day(&mut pool, d(2025, 5, 6), &codes("vroeg"), &rules).expect("edit");

    let third = MonthLogic::report(&mut pool, may, &rules, false).expect("report");
    assert!(!third.from_cache);
    assert_eq!(third.report.summary.total_hours, 14.0);
    assert_eq!(third.report.summary.worked_days, 2);
    assert_eq!(third.report.summary.free_days, 29);
}

#[test]
fn test_code_change_invalidates_every_month() {
    let mut pool = open("report_cache_code");
    let rules = EngineRules::default();
    let may = MonthKey::new(2025, 5).unwrap();
    let june = MonthKey::new(2025, 6).unwrap();
    add_early(&mut pool);

    MonthLogic::edit_day(&mut pool, d(2025, 5, 5), &codes("vroeg"), &rules).expect("edit");
    MonthLogic::edit_day(&mut pool, d(2025, 6, 2), &codes("vroeg"), &rules).expect("edit");
    MonthLogic::report(&mut pool, may, &rules, false).expect("report");
    MonthLogic::report(&mut pool, june, &rules, false).expect("report");

    // 08:00–16:00 with 30 minutes break now
    let edit = CodeEdit {
        break_minutes: Some(30),
        ..CodeEdit::default()
    };
    CodeLogic::set(&mut pool, "vroeg", &edit).expect("set");

    for month in [may, june] {
        let out = MonthLogic::report(&mut pool, month, &rules, false).expect("report");
        assert!(!out.from_cache);
        assert_eq!(out.report.summary.total_hours, 7.5);
    }
}

#[test]
fn test_recalc_forces_a_fresh_report() {
    let mut pool = open("report_recalc");
    let rules = EngineRules::default();
    let may = MonthKey::new(2025, 5).unwrap();

    MonthLogic::report(&mut pool, may, &rules, false).expect("report");
    let forced = MonthLogic::report(&mut pool, may, &rules, true).expect("report");
    assert!(!forced.from_cache);
}

#[test]
fn test_night_day_in_stored_month() {
    let mut pool = open("night_day_stored");
    let rules = EngineRules::default();
    let may = MonthKey::new(2025, 5).unwrap();

    // n10 not configured: zero hours, still shown as night
    MonthLogic::edit_day(&mut pool, d(2025, 5, 7), &codes("n10"), &rules).expect("edit");
    let out = MonthLogic::report(&mut pool, may, &rules, false).expect("report");

    let day = out
        .report
        .days
        .iter()
        .find(|day| day.date == d(2025, 5, 7))
        .expect("day");
    assert_eq!(day.category, DayCategory::Night);
    assert_eq!(day.total_hours, 0.0);
    assert_eq!(out.report.summary.worked_days, 0);
}

#[test]
fn test_reset_month_blanks_every_day() {
    let mut pool = open("reset_month");
    let rules = EngineRules::default();
    let may = MonthKey::new(2025, 5).unwrap();
    add_early(&mut pool);

    MonthLogic::edit_day(&mut pool, d(2025, 5, 5), &codes("vroeg"), &rules).expect("edit");
    MonthLogic::report(&mut pool, may, &rules, false).expect("report");

    let n = MonthLogic::reset_month(&mut pool, may).expect("reset");
    assert_eq!(n, 31);

    let out = MonthLogic::report(&mut pool, may, &rules, false).expect("report");
    assert!(!out.from_cache);
    assert_eq!(out.report.summary.total_hours, 0.0);
    assert_eq!(out.report.summary.free_days, 31);
}

#[test]
fn test_code_validation_and_delete() {
    let mut pool = open("code_validation");

    assert_eq!(canonical_code(" N10 ").unwrap(), "n10");
    assert!(matches!(canonical_code("a+b"), Err(AppError::InvalidCode(_))));
    assert!(matches!(canonical_code(" , "), Err(AppError::InvalidCode(_))));

    let res = CodeLogic::delete(&mut pool, "missing");
    assert!(matches!(res, Err(AppError::UnknownCode(_))));

    add_early(&mut pool);
    CodeLogic::delete(&mut pool, "VROEG").expect("delete");
    assert!(CodeLogic::registry(&pool).unwrap().get("vroeg").is_none());
}

#[test]
fn test_variable_flag_clears_time_range() {
    let mut pool = open("code_variable");
    add_early(&mut pool);

    let edit = CodeEdit {
        variable: true,
        ..CodeEdit::default()
    };
    let def = CodeLogic::set(&mut pool, "vroeg", &edit).expect("set");

    assert!(def.start.is_none() && def.end.is_none());
    assert_eq!(def.label, "Early");
    assert_eq!(def.time_range(), "variable");
}

#[test]
fn test_month_key_parsing_and_navigation() {
    let m = MonthKey::parse("2025-01").unwrap();
    assert_eq!(m.to_string(), "2025-01");
    assert_eq!(m.prev().to_string(), "2024-12");
    assert_eq!(m.next().to_string(), "2025-02");
    assert_eq!(MonthKey::parse("2025-12").unwrap().next().to_string(), "2026-01");
    assert_eq!(MonthKey::parse("2025-3").unwrap().to_string(), "2025-03");

    for bad in ["2025", "2025-13", "2025-00", "25-01", "2025-01-01", "abcd-ef"] {
        assert!(
            matches!(MonthKey::parse(bad), Err(AppError::InvalidMonth(_))),
            "{bad}"
        );
    }
}

#[test]
fn test_training_hours_above_one_day_rejected() {
    let mut pool = open("training_upper_bound");
    let rules = EngineRules::default();

    for bad in [24.01, 1e300, f64::INFINITY, f64::NAN] {
        let edit = DayEdit {
            training_hours: Some(bad),
            ..DayEdit::default()
        };
        let res = MonthLogic::edit_day(&mut pool, d(2025, 5, 7), &edit, &rules);
        assert!(matches!(res, Err(AppError::InvalidNumber(_))), "{bad}");
    }

    let edit = DayEdit {
        codes: Some("bijs".to_string()),
        training_hours: Some(24.0),
        ..DayEdit::default()
    };
    let rec = MonthLogic::edit_day(&mut pool, d(2025, 5, 7), &edit, &rules).expect("edit");
    assert_eq!(rec.training_hours, 24.0);
}

#[test]
fn test_edit_day_stores_record_and_drops_cached_report() {
    let mut pool = open("edit_day_drops_cache");
    let rules = EngineRules::default();
    let may = MonthKey::new(2025, 5).unwrap();

    MonthLogic::report(&mut pool, may, &rules, false).expect("report");
    assert!(queries::load_cached_report(&pool.conn, may).unwrap().is_some());

    MonthLogic::edit_day(&mut pool, d(2025, 5, 8), &codes("x"), &rules).expect("edit");

    assert!(queries::load_cached_report(&pool.conn, may).unwrap().is_none());
    let stored = queries::load_day(&pool.conn, d(2025, 5, 8))
        .expect("load")
        .expect("row");
    assert_eq!(stored.codes.to_string(), "x");
}

#[test]
fn test_changed_engine_rules_bypass_the_cache() {
    let mut pool = open("report_cache_rules");
    let may = MonthKey::new(2025, 5).unwrap();
    let defaults = EngineRules::default();
    let custom = EngineRules::new("nacht", "bijs");

    MonthLogic::edit_day(&mut pool, d(2025, 5, 9), &codes("nacht"), &defaults).expect("edit");

    let first = MonthLogic::report(&mut pool, may, &defaults, false).expect("report");
    let day = |r: &shiftcal::models::summary::MonthReport| {
        r.days
            .iter()
            .find(|day| day.date == d(2025, 5, 9))
            .map(|day| day.category)
            .expect("day")
    };
    assert_eq!(day(&first.report), DayCategory::Free);

    let second = MonthLogic::report(&mut pool, may, &custom, false).expect("report");
    assert!(!second.from_cache);
    assert_eq!(second.report.rules, custom);
    assert_eq!(day(&second.report), DayCategory::Night);

    // same rules again: served from the cache
    let third = MonthLogic::report(&mut pool, may, &custom, false).expect("report");
    assert!(third.from_cache);
    assert_eq!(day(&third.report), DayCategory::Night);
}

#[test]
fn test_delete_returns_canonical_code() {
    let mut pool = open("code_delete_canonical");
    add_early(&mut pool);

    let deleted = CodeLogic::delete(&mut pool, " Vro eg ").expect("delete");
    assert_eq!(deleted, "vroeg");
}
