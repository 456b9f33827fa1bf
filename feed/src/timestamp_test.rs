use super::*;
use chrono::TimeZone;

#[test]
fn formats_in_pacific_daylight_time() {
    let now = Utc.with_ymd_and_hms(2026, 10, 17, 22, 4, 5).single().expect("valid instant");
    assert_eq!(format_stamp(now), "Oct 17, 2026, 3:04:05 PM");
}

#[test]
fn formats_in_pacific_standard_time() {
    let now = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 9).single().expect("valid instant");
    assert_eq!(format_stamp(now), "Jan 5, 2026, 12:00:09 AM");
}

#[test]
fn date_rolls_back_across_midnight_utc() {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 3, 30, 0).single().expect("valid instant");
    assert_eq!(format_stamp(now), "Feb 28, 2026, 7:30:00 PM");
}
