use ccub::errors::ErrorClass;
use ccub::utils::time::{
    ceil_minutes, format_kitchen, parse_kitchen_time, parse_work_periods_arg,
    same_day_kitchen_time_diff,
};
use chrono::{NaiveTime, TimeDelta, Timelike, Utc};

mod common;
use common::ymd;

fn hm(t: &chrono::DateTime<Utc>) -> (u32, u32) {
    (t.hour(), t.minute())
}

#[test]
fn test_kitchen_time_twelve_oclock_edges() {
    let d = ymd(2022, 2, 8);
    assert_eq!(hm(&parse_kitchen_time(d, "12AM").unwrap()), (0, 0));
    assert_eq!(hm(&parse_kitchen_time(d, "12:30am").unwrap()), (0, 30));
    assert_eq!(hm(&parse_kitchen_time(d, "12PM").unwrap()), (12, 0));
    assert_eq!(hm(&parse_kitchen_time(d, "12:05pm").unwrap()), (12, 5));
}

#[test]
fn test_kitchen_time_keeps_calendar_date() {
    let d = ymd(2022, 2, 8);
    let t = parse_kitchen_time(d, "3:15PM").unwrap();
    assert_eq!(t.date_naive(), d);
    assert_eq!(hm(&t), (15, 15));
    assert_eq!(t.timezone(), Utc);
}

#[test]
fn test_kitchen_time_is_monotonic() {
    let d = ymd(2022, 2, 8);
    let start = parse_kitchen_time(d, "2:00PM").unwrap();
    let end = parse_kitchen_time(d, "3:00PM").unwrap();
    assert_eq!(end - start, TimeDelta::minutes(60));
}

#[test]
fn test_kitchen_time_rejects_malformed_input() {
    let d = ymd(2022, 2, 8);
    for input in ["13:00", "3:60PM", "1:5PM", "3PMx", " 3PM", "", "noon", "3:15", "99999999999PM", "4294967295PM", "4294967284pm"] {
        let err = parse_kitchen_time(d, input).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Parse, "{input:?}");
    }
}

#[test]
fn test_kitchen_time_rejects_hours_past_23_after_shift() {
    let d = ymd(2022, 2, 8);
    assert!(parse_kitchen_time(d, "13PM").is_err());
    assert!(parse_kitchen_time(d, "24AM").is_err());
    assert_eq!(hm(&parse_kitchen_time(d, "13AM").unwrap()), (13, 0));
}

#[test]
fn test_format_kitchen() {
    let t = NaiveTime::from_hms_opt(15, 4, 59).unwrap();
    assert_eq!(format_kitchen(&t), "3:04PM");
    let t = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
    assert_eq!(format_kitchen(&t), "12:00AM");
}

#[test]
fn test_same_day_diff() {
    assert_eq!(
        same_day_kitchen_time_diff("3:45PM", "3:00PM").unwrap(),
        TimeDelta::minutes(45)
    );
    assert_eq!(
        same_day_kitchen_time_diff("9:00AM", "10:30AM").unwrap(),
        TimeDelta::minutes(-90)
    );
    assert!(same_day_kitchen_time_diff("later", "3:00PM").is_err());
}

#[test]
fn test_ceil_minutes() {
    assert_eq!(ceil_minutes(TimeDelta::zero()), 0);
    assert_eq!(ceil_minutes(TimeDelta::seconds(60)), 1);
    assert_eq!(ceil_minutes(TimeDelta::seconds(61)), 2);
    assert_eq!(ceil_minutes(TimeDelta::seconds(-30)), 0);
}

#[test]
fn test_work_periods_in_given_order() {
    let periods = parse_work_periods_arg(ymd(2022, 2, 8), "1pm-3:15pm,9am-11:30am").unwrap();

    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].start_time, "1:00PM");
    assert_eq!(periods[0].end_time.as_deref(), Some("3:15PM"));
    assert_eq!(periods[0].duration_min, 135);
    assert_eq!(periods[1].start_time, "9:00AM");
    assert_eq!(periods[1].duration_min, 150);
    assert!(periods.iter().all(|p| !p.is_open()));
}

#[test]
fn test_work_period_zero_length_is_allowed() {
    let periods = parse_work_periods_arg(ymd(2022, 2, 8), "2pm-2pm").unwrap();
    assert_eq!(periods[0].duration_min, 0);
}

#[test]
fn test_work_period_start_after_end() {
    let err = parse_work_periods_arg(ymd(2022, 2, 8), "2pm-1pm").unwrap_err();
    assert!(err.to_string().contains("is after end time"));

    // Bare hours are not kitchen times at all.
    assert!(parse_work_periods_arg(ymd(2022, 2, 8), "2-1").is_err());
}

#[test]
fn test_work_period_needs_exactly_two_sides() {
    let d = ymd(2022, 2, 8);
    for input in ["1pm", "1pm-2pm-3pm", "1pm-2pm,", ""] {
        let err = parse_work_periods_arg(d, input).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Parse, "{input:?}");
    }
}

#[test]
fn test_work_period_reports_bad_side() {
    let d = ymd(2022, 2, 8);
    assert_eq!(
        parse_work_periods_arg(d, "1xm-2pm").unwrap_err().to_string(),
        "Bad start time: 1xm"
    );
    assert_eq!(
        parse_work_periods_arg(d, "1pm-2xm").unwrap_err().to_string(),
        "Bad end time: 2xm"
    );
}
