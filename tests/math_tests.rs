use chrono::{Duration, Local, TimeZone};
use timetally::core::math::{Elapsed, charge, elapsed_hours, round2};
use timetally::errors::AppError;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> chrono::DateTime<Local> {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("valid local datetime")
}

#[test]
fn test_round2_rounds_half_up_on_the_decimal_value() {
    assert_eq!(round2(1.005), 1.01);
    assert_eq!(round2(2.675), 2.68);
    assert_eq!(round2(0.615), 0.62);
    assert_eq!(round2(1.004), 1.0);
    assert_eq!(round2(1.0049), 1.0);
    assert_eq!(round2(0.0), 0.0);
    assert_eq!(round2(8.5), 8.5);
}

#[test]
fn test_round2_is_idempotent() {
    for x in [0.0, 0.005, 1.005, 2.675, 3.14159, 8.5, 170.0, 9999.995] {
        let once = round2(x);
        assert_eq!(round2(once), once, "round2(round2({x})) drifted");
    }
}

#[test]
fn test_elapsed_hours_rejects_end_before_start() {
    let start = at(2024, 1, 1, 9, 0);
    let end = at(2024, 1, 1, 8, 59);
    assert!(matches!(
        elapsed_hours(start, end),
        Err(AppError::InvalidInterval(_))
    ));
}

#[test]
fn test_elapsed_hours_zero_interval_is_valid() {
    let t = at(2024, 1, 1, 9, 0);
    assert_eq!(elapsed_hours(t, t).unwrap(), 0.0);
}

#[test]
fn test_elapsed_hours_is_monotonic_in_end() {
    let start = at(2024, 1, 1, 9, 0);
    let mut prev = 0.0;
    for mins in [0, 1, 30, 59, 60, 61, 120, 480, 1440] {
        let h = elapsed_hours(start, start + Duration::minutes(mins)).unwrap();
        assert!(h >= prev, "elapsed_hours not monotonic at +{mins}m");
        prev = h;
    }
}

#[test]
fn test_workday_scenario() {
    // 09:00 → 17:30 at 20/h
    let hours = elapsed_hours(at(2024, 1, 1, 9, 0), at(2024, 1, 1, 17, 30)).unwrap();
    assert_eq!(hours, 8.5);
    assert_eq!(charge(hours, 20.0), 170.0);
}

#[test]
fn test_one_hour_one_minute_one_second() {
    let start = at(2024, 1, 1, 9, 0);
    let end = start + Duration::seconds(3661);
    assert_eq!(elapsed_hours(start, end).unwrap(), 1.02);
}

#[test]
fn test_charge_with_zero_rate() {
    assert_eq!(charge(8.5, 0.0), 0.0);
}

#[test]
fn test_elapsed_split() {
    let e = Elapsed::from_millis(3_661_000);
    assert_eq!((e.days, e.hours, e.minutes, e.seconds), (0, 1, 1, 1));
    assert_eq!(e.to_string(), "01:01:01");

    // 1 day, 1 hour, 1 minute, 1 second; the day is carried separately
    let e = Elapsed::from_millis(90_061_000);
    assert_eq!((e.days, e.hours, e.minutes, e.seconds), (1, 1, 1, 1));
    assert_eq!(e.to_string(), "01:01:01");

    // sub-second deltas floor to zero
    let e = Elapsed::from_millis(999);
    assert_eq!((e.days, e.hours, e.minutes, e.seconds), (0, 0, 0, 0));
}
