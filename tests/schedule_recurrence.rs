use chrono::NaiveDate;
use schoolcore::{generate_recurring_dates, next_occurrence, occurrences_in_window, ClassScheduleSpec};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn spec(start: &str, end: &str, day: &str) -> ClassScheduleSpec {
    ClassScheduleSpec {
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
        day: Some(day.to_string()),
        start_time: Some("09:00".to_string()),
        end_time: Some("10:30".to_string()),
    }
}

#[test]
fn mondays_of_january_2024() {
    // 2024-01-01 is a Monday.
    let dates = generate_recurring_dates(d(2024, 1, 1), d(2024, 1, 31), "Monday", d(2024, 1, 1), d(2024, 1, 31));
    assert_eq!(
        dates,
        vec!["2024-01-01", "2024-01-08", "2024-01-15", "2024-01-22", "2024-01-29"]
    );
}

#[test]
fn window_clips_the_class_range() {
    // Class runs all of January; the query window is the third week.
    let dates = generate_recurring_dates(d(2024, 1, 1), d(2024, 1, 31), "Wednesday", d(2024, 1, 15), d(2024, 1, 21));
    assert_eq!(dates, vec!["2024-01-17"]);

    // Class range clips the window just as well.
    let dates = generate_recurring_dates(d(2024, 1, 10), d(2024, 1, 12), "Friday", d(2024, 1, 1), d(2024, 1, 31));
    assert_eq!(dates, vec!["2024-01-12"]);
}

#[test]
fn disjoint_ranges_and_unknown_days_yield_empty() {
    assert!(generate_recurring_dates(d(2024, 1, 1), d(2024, 1, 5), "Monday", d(2024, 2, 1), d(2024, 2, 28)).is_empty());
    assert!(generate_recurring_dates(d(2024, 1, 1), d(2024, 1, 31), "Funday", d(2024, 1, 1), d(2024, 1, 31)).is_empty());
}

#[test]
fn range_shorter_than_a_week_has_at_most_one_date() {
    let dates = generate_recurring_dates(d(2024, 1, 2), d(2024, 1, 8), "Monday", d(2024, 1, 2), d(2024, 1, 8));
    assert_eq!(dates, vec!["2024-01-08"]);
}

#[test]
fn occurrences_in_window_degrades_on_missing_or_bad_fields() {
    let full = spec("2024-01-01", "2024-01-31", "Monday");
    assert_eq!(occurrences_in_window(&full, d(2024, 1, 1), d(2024, 1, 14)).len(), 2);

    let mut no_day = full.clone();
    no_day.day = None;
    assert!(occurrences_in_window(&no_day, d(2024, 1, 1), d(2024, 1, 14)).is_empty());

    let mut bad_date = full.clone();
    bad_date.start_date = Some("01/01/2024".to_string());
    assert!(occurrences_in_window(&bad_date, d(2024, 1, 1), d(2024, 1, 14)).is_empty());

    assert!(occurrences_in_window(&ClassScheduleSpec::default(), d(2024, 1, 1), d(2024, 1, 14)).is_empty());
}

#[test]
fn next_occurrence_advances_to_coming_weekday() {
    let s = spec("2024-01-01", "2024-06-30", "Wednesday");
    // Monday the 15th -> Wednesday the 17th.
    assert_eq!(next_occurrence(&s, d(2024, 1, 15)), "2024-01-17");
}

#[test]
fn next_occurrence_skips_today_when_it_matches() {
    let s = spec("2024-01-01", "2024-06-30", "Monday");
    // Today is a Monday: the next occurrence is a full week out.
    assert_eq!(next_occurrence(&s, d(2024, 1, 15)), "2024-01-22");
}

#[test]
fn next_occurrence_falls_back_past_end_date() {
    let s = spec("2024-01-01", "2024-01-31", "Monday");
    // Next Monday after the 30th is 2024-02-05, past the end: raw start_date.
    assert_eq!(next_occurrence(&s, d(2024, 1, 30)), "2024-01-01");
}

#[test]
fn next_occurrence_falls_back_without_recurrence_fields() {
    let mut s = spec("2024-03-04", "2024-06-30", "Monday");
    s.day = None;
    assert_eq!(next_occurrence(&s, d(2024, 1, 15)), "2024-03-04");

    // No fields at all: today's date.
    assert_eq!(next_occurrence(&ClassScheduleSpec::default(), d(2024, 1, 15)), "2024-01-15");
}
