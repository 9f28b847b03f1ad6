#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME pointed at a throw-away directory so no real
/// configuration file is read or written.
pub fn shc(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("shiftcal");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftcal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Empty HOME directory for one test
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftcal_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftcal_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and configure the codes used across tests:
/// - n10:   22:00–06:00, 30 min break (7.5h)
/// - vroeg: 08:00–16:00, 60 min break (7.0h)
pub fn init_db_with_codes(home: &str, db_path: &str) {
    shc(home)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    shc(home)
        .args([
            "--db", db_path, "code", "set", "n10", "--start", "22:00", "--end", "06:00", "--break",
            "30", "--label", "Night",
        ])
        .assert()
        .success();

    shc(home)
        .args([
            "--db", db_path, "code", "set", "vroeg", "--start", "08:00", "--end", "16:00",
            "--break", "60", "--label", "Early",
        ])
        .assert()
        .success();
}
