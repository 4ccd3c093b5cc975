mod common;
use common::{seed_entries, setup_test_data, stored_ids, tt};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_add_then_list_shows_entries_and_totals() {
    let data = setup_test_data("add_list");
    seed_entries(&data);

    tt().args(["--data", &data, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01, 09:00"))
        .stdout(predicate::str::contains("2024-01-01, 17:30"))
        .stdout(predicate::str::contains("8.50"))
        .stdout(predicate::str::contains("170.00"))
        .stdout(predicate::str::contains("10.50"))
        .stdout(predicate::str::contains("210.00"));
}

#[test]
fn test_list_on_fresh_data_file_is_empty() {
    let data = setup_test_data("list_empty");
    tt().args(["--data", &data, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries recorded yet."));
}

#[test]
fn test_add_rejects_inverted_interval() {
    let data = setup_test_data("add_inverted");
    tt().args([
        "--data",
        &data,
        "--test",
        "add",
        "--start",
        "2024-01-01T17:00",
        "--end",
        "2024-01-01T09:00",
        "--rate",
        "20",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid interval"));
}

#[test]
fn test_add_rejects_negative_rate() {
    let data = setup_test_data("add_negative_rate");
    tt().args([
        "--data",
        &data,
        "--test",
        "add",
        "--start",
        "2024-01-01T09:00",
        "--end",
        "2024-01-01T10:00",
        "--rate=-5",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid hourly rate"));
}

#[test]
fn test_add_rejects_malformed_datetime() {
    let data = setup_test_data("add_malformed");
    tt().args([
        "--data",
        &data,
        "--test",
        "add",
        "--start",
        "yesterday",
        "--end",
        "2024-01-01T10:00",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid date/time"));
}

#[test]
fn test_del_removes_a_single_entry() {
    let data = setup_test_data("del_one");
    seed_entries(&data);

    let ids = stored_ids(&data);
    assert_eq!(ids.len(), 2);

    tt().args(["--data", &data, "--test", "del", &ids[0]])
        .write_stdin("y\n")
        .assert()
        .success();

    let remaining = stored_ids(&data);
    assert_eq!(remaining, vec![ids[1].clone()]);

    // totals now reflect only the second entry (2 h at 20/h)
    tt().args(["--data", &data, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.00"))
        .stdout(predicate::str::contains("40.00"));
}

#[test]
fn test_del_accepts_a_unique_id_prefix() {
    let data = setup_test_data("del_prefix");
    seed_entries(&data);

    let ids = stored_ids(&data);
    let prefix = &ids[0][..8];

    tt().args(["--data", &data, "--test", "del", "--yes", prefix])
        .assert()
        .success();

    assert_eq!(stored_ids(&data).len(), 1);
}

#[test]
fn test_del_unknown_id_is_a_safe_noop() {
    let data = setup_test_data("del_unknown");
    seed_entries(&data);

    tt().args(["--data", &data, "--test", "del", "--yes", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));

    assert_eq!(stored_ids(&data).len(), 2);
}

#[test]
fn test_del_declined_confirmation_keeps_the_entry() {
    let data = setup_test_data("del_declined");
    seed_entries(&data);
    let ids = stored_ids(&data);

    tt().args(["--data", &data, "--test", "del", &ids[0]])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    assert_eq!(stored_ids(&data).len(), 2);
}

#[test]
fn test_rate_set_and_get() {
    let data = setup_test_data("rate_set_get");

    tt().args(["--data", &data, "--test", "rate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hourly rate: 0.00"));

    tt().args(["--data", &data, "--test", "rate", "--set", "25.5"])
        .assert()
        .success();

    tt().args(["--data", &data, "--test", "rate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hourly rate: 25.50"));
}

#[test]
fn test_rate_rejects_negative_values() {
    let data = setup_test_data("rate_negative");
    tt().args(["--data", &data, "--test", "rate", "--set=-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hourly rate"));
}

#[test]
fn test_saved_rate_is_used_when_add_omits_it() {
    let data = setup_test_data("rate_default");

    tt().args(["--data", &data, "--test", "rate", "--set", "20"])
        .assert()
        .success();

    tt().args([
        "--data",
        &data,
        "--test",
        "add",
        "--start",
        "2024-01-01T09:00",
        "--end",
        "2024-01-01T17:30",
    ])
    .assert()
    .success();

    tt().args(["--data", &data, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("170.00"));
}

#[test]
fn test_corrupted_data_file_falls_back_to_empty() {
    let data = setup_test_data("corrupt");
    fs::write(&data, "definitely not json {{{").unwrap();

    tt().args(["--data", &data, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries recorded yet."));
}

#[test]
fn test_corrupted_entries_value_falls_back_to_empty() {
    let data = setup_test_data("corrupt_value");
    fs::write(&data, "{\"time-tracking-data\": \"[not json\"}").unwrap();

    tt().args(["--data", &data, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries recorded yet."));
}

#[test]
fn test_reset_clears_all_entries_but_keeps_the_rate() {
    let data = setup_test_data("reset_all");
    seed_entries(&data);

    tt().args(["--data", &data, "--test", "rate", "--set", "20"])
        .assert()
        .success();

    tt().args(["--data", &data, "--test", "reset"])
        .write_stdin("y\n")
        .assert()
        .success();

    tt().args(["--data", &data, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries recorded yet."));

    tt().args(["--data", &data, "--test", "rate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hourly rate: 20.00"));
}

#[test]
fn test_track_records_an_entry_on_enter() {
    let data = setup_test_data("track_enter");

    tt().args(["--data", &data, "--test", "track", "--rate", "10"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));

    assert_eq!(stored_ids(&data).len(), 1);
}

#[test]
fn test_track_quit_discards_the_session() {
    let data = setup_test_data("track_quit");

    // 'q' then a confirming 'y': the session ends without an entry
    tt().args(["--data", &data, "--test", "track", "--rate", "10"])
        .write_stdin("q\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing recorded"));

    tt().args(["--data", &data, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries recorded yet."));
}

#[test]
fn test_track_declined_quit_keeps_the_session_running() {
    let data = setup_test_data("track_quit_declined");

    // 'q' answered with 'n' keeps timing; the following Enter records
    tt().args(["--data", &data, "--test", "track", "--rate", "10"])
        .write_stdin("q\nn\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));

    assert_eq!(stored_ids(&data).len(), 1);
}

#[test]
fn test_interactive_add_warns_on_unparseable_rate_and_uses_saved_rate() {
    let data = setup_test_data("add_bad_rate_input");

    tt().args(["--data", &data, "--test", "rate", "--set", "15"])
        .assert()
        .success();

    tt().args(["--data", &data, "--test", "add"])
        .write_stdin("2024-01-01T09:00\n2024-01-01T10:00\nabc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized rate 'abc'"))
        .stdout(predicate::str::contains("15.00"));

    tt().args(["--data", &data, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15.00"));
}

#[test]
fn test_init_creates_the_data_file() {
    let data = setup_test_data("init_data");

    tt().args(["--data", &data, "--test", "init"])
        .assert()
        .success();

    assert!(std::path::Path::new(&data).exists());
}
