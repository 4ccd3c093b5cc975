#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tt() -> Command {
    cargo_bin_cmd!("timetally")
}

/// Create a unique test data file path inside the system temp dir and remove any existing file
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timetally.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add a small dataset useful for many tests:
/// 8.5 h at 20/h (price 170) and 2 h at 20/h (price 40).
pub fn seed_entries(data_path: &str) {
    tt().args([
        "--data",
        data_path,
        "--test",
        "add",
        "--start",
        "2024-01-01T09:00",
        "--end",
        "2024-01-01T17:30",
        "--rate",
        "20",
    ])
    .assert()
    .success();

    tt().args([
        "--data",
        data_path,
        "--test",
        "add",
        "--start",
        "2024-01-02T10:00",
        "--end",
        "2024-01-02T12:00",
        "--rate",
        "20",
    ])
    .assert()
    .success();
}

/// Read the ids stored in a data file, in insertion order.
pub fn stored_ids(data_path: &str) -> Vec<String> {
    let raw = fs::read_to_string(data_path).expect("read data file");
    let doc: serde_json::Value = serde_json::from_str(&raw).expect("parse data file");
    let entries_raw = doc["time-tracking-data"].as_str().expect("entries key");
    let entries: Vec<serde_json::Value> = serde_json::from_str(entries_raw).expect("parse entries");
    entries
        .iter()
        .map(|e| e["id"].as_str().expect("id").to_string())
        .collect()
}
