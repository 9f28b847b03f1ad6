use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_codes, setup_test_db, shc, temp_home, temp_out};

fn fill_march(home: &str, db_path: &str) {
    shc(home)
        .args([
            "--db",
            db_path,
            "day",
            "2025-03-03",
            "--codes",
            "vroeg+bijs",
            "--training",
            "2",
            "--overtime",
            "30",
        ])
        .assert()
        .success();

    shc(home)
        .args(["--db", db_path, "day", "2025-03-04", "--codes", "n10"])
        .assert()
        .success();
}

#[test]
fn test_export_csv_one_row_per_day() {
    let home = temp_home("export_csv");
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_codes(&home, &db_path);
    fill_march(&home, &db_path);

    shc(&home)
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "2025-03",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    let mut lines = content.lines();

    let header = lines.next().expect("header");
    assert!(header.starts_with("date,weekday,iso_year,iso_week,codes"));
    assert!(header.contains("total_hours"));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 31);
    assert!(rows[0].starts_with("2025-03-01,"));
    assert!(rows[2].starts_with("2025-03-03,Mon,2025,10,vroeg+bijs,"));
    assert!(rows[2].contains("9.5"));
    assert!(rows[3].contains("night"));
}

#[test]
fn test_export_json_with_weeks_and_totals() {
    let home = temp_home("export_json");
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_codes(&home, &db_path);
    fill_march(&home, &db_path);

    shc(&home)
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--month", "2025-03",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("json written");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(doc["month"], "2025-03");
    assert_eq!(doc["total_hours"].as_f64(), Some(17.0));
    assert_eq!(doc["worked_days"].as_u64(), Some(2));
    assert_eq!(doc["free_days"].as_u64(), Some(29));

    let days = doc["days"].as_array().expect("days");
    assert_eq!(days.len(), 31);
    assert_eq!(days[2]["date"], "2025-03-03");
    assert_eq!(days[2]["total_hours"].as_f64(), Some(9.5));
    assert_eq!(days[3]["category"], "night");

    let weeks = doc["weeks"].as_array().expect("weeks");
    assert!(weeks.len() >= 5);
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let home = temp_home("export_existing");
    let db_path = setup_test_db("export_existing");
    let out = temp_out("export_existing", "csv");
    init_db_with_codes(&home, &db_path);

    fs::write(&out, "keep me").expect("seed file");

    shc(&home)
        .args([
            "--db", &db_path, "export", "--file", &out, "--month", "2025-03",
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    shc(&home)
        .args([
            "--db", &db_path, "export", "--file", &out, "--month", "2025-03", "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("date,"));
}
