use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use rtimeline::errors::AppError;
use rtimeline::timeline::{EventKind, RawRow, normalize_row, normalize_timeline};
use rtimeline::utils::resolve_timezone;

mod common;
use common::SAMPLE_TIMELINE;

fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_range_row_end_to_end() {
    let tz = ist();
    let row = RawRow::new(
        "Mentee Applications Open",
        "Monday, January 26 – Tuesday, February 10, 2026, 11AM PST (19:00 UTC)",
    );

    let events = normalize_row(&row, &tz).unwrap();
    assert_eq!(events.len(), 2);

    let opens = &events[0];
    assert_eq!(opens.title, "Opens: Mentee Applications Open");
    assert_eq!(opens.kind, EventKind::Opens);
    assert_eq!(opens.start, tz.with_ymd_and_hms(2026, 1, 26, 0, 1, 0).unwrap());
    assert_eq!(opens.end, tz.with_ymd_and_hms(2026, 1, 26, 1, 0, 0).unwrap());

    let closes = &events[1];
    assert_eq!(closes.title, "Closes: Mentee Applications Open");
    assert_eq!(closes.kind, EventKind::Closes);
    assert_eq!(closes.start, tz.with_ymd_and_hms(2026, 2, 10, 23, 0, 0).unwrap());
    assert_eq!(closes.end, tz.with_ymd_and_hms(2026, 2, 10, 23, 59, 0).unwrap());
}

#[test]
fn test_single_date_is_a_deadline() {
    let row = RawRow::new("Final Report", "Tuesday, March 3, 2026, 11AM PST (19:00 UTC)");

    let events = normalize_row(&row, &Utc).unwrap();
    assert_eq!(events.len(), 1);

    let ev = &events[0];
    assert_eq!(ev.title, "Closes: Final Report");
    assert_eq!(ev.kind, EventKind::Closes);
    assert_eq!(ev.start.date_naive(), ymd(2026, 3, 3));
    assert_eq!(ev.end.date_naive(), ymd(2026, 3, 3));
    assert!(ev.start < ev.end);
    assert_eq!(ev.start.to_rfc3339(), "2026-03-03T23:00:00+00:00");
    assert_eq!(ev.end.to_rfc3339(), "2026-03-03T23:59:00+00:00");
}

#[test]
fn test_range_start_inherits_year() {
    let row = RawRow::new("Review", "January 7 – January 20, 2026");
    let events = normalize_row(&row, &Utc).unwrap();

    assert_eq!(events[0].start.date_naive(), ymd(2026, 1, 7));
    assert_eq!(events[1].end.date_naive(), ymd(2026, 1, 20));
}

#[test]
fn test_range_across_years_keeps_start_year() {
    let row = RawRow::new("Winter Break", "December 22, 2025 – January 5, 2026");
    let events = normalize_row(&row, &Utc).unwrap();

    assert_eq!(events[0].start.date_naive(), ymd(2025, 12, 22));
    assert_eq!(events[1].start.date_naive(), ymd(2026, 1, 5));
}

#[test]
fn test_events_stay_on_their_day() {
    let tz = ist();
    for text in [
        "Monday, January 26 – Tuesday, February 10, 2026",
        "Feb 10, 2026",
        "June 1 – June 30, 2026",
    ] {
        let events = normalize_row(&RawRow::new("x", text), &tz).unwrap();
        for ev in &events {
            assert!(ev.start < ev.end, "{text}");
            assert_eq!(ev.start.date_naive(), ev.end.date_naive(), "{text}");
        }
    }
}

#[test]
fn test_unparseable_text_fails_with_title() {
    let row = RawRow::new("Launch Party", "sometime next year");
    let err = normalize_row(&row, &Utc).unwrap_err();

    match err {
        AppError::DateParse { title, text, .. } => {
            assert_eq!(title, "Launch Party");
            assert_eq!(text, "sometime next year");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_broken_range_side_does_not_fall_back() {
    // the end side alone would parse as a single date
    let row = RawRow::new("Half", "whenever – March 3, 2026");
    assert!(matches!(
        normalize_row(&row, &Utc),
        Err(AppError::DateParse { .. })
    ));
}

#[test]
fn test_timeline_flattens_in_document_order() {
    let events = normalize_timeline(SAMPLE_TIMELINE, &Utc, &["Activity"]).unwrap();

    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Opens: Mentee Applications Open",
            "Closes: Mentee Applications Open",
            "Opens: Application Review Period",
            "Closes: Application Review Period",
            "Closes: Mentee Admission Deadline",
        ]
    );
}

#[test]
fn test_one_bad_row_aborts_everything() {
    let md = format!("{SAMPLE_TIMELINE}| **Launch Party** | sometime next year |\n");
    let err = normalize_timeline(&md, &Utc, &["Activity"]).unwrap_err();
    assert!(err.to_string().contains("sometime next year"));
    assert!(err.to_string().contains("Launch Party"));
}

#[test]
fn test_normalization_is_idempotent() {
    let tz = resolve_timezone("Asia/Kolkata").unwrap();
    let first = normalize_timeline(SAMPLE_TIMELINE, &tz, &["Activity"]).unwrap();
    let second = normalize_timeline(SAMPLE_TIMELINE, &tz, &["Activity"]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_named_zone_in_text_is_ignored() {
    // "11AM PST" is noise; markers use the caller's zone
    let tz = resolve_timezone("Asia/Kolkata").unwrap();
    let row = RawRow::new("Deadline", "Tuesday, February 10, 2026, 11AM PST (19:00 UTC)");
    let events = normalize_row(&row, &tz).unwrap();

    assert_eq!(events[0].start.to_rfc3339(), "2026-02-10T23:00:00+05:30");
}

#[test]
fn test_wrong_weekday_does_not_drop_the_timeline() {
    let md = "\
| **Applications** | Monday, January 26 – Monday, February 10, 2026 |
| **Admission** | March 3, 2026 |
";
    let events = normalize_timeline(md, &Utc, &["Activity"]).unwrap();

    assert_eq!(events.len(), 3);
    assert_eq!(events[1].end.date_naive(), ymd(2026, 2, 10));
    assert_eq!(events[2].title, "Closes: Admission");
    assert_eq!(events[2].start.date_naive(), ymd(2026, 3, 3));
}

#[test]
fn test_marker_in_dst_gap_moves_forward() {
    // Chile springs forward at midnight: 2025-09-07 00:00 → 01:00
    let tz = resolve_timezone("America/Santiago").unwrap();
    let row = RawRow::new("Spring Term", "September 7 – September 20, 2025");

    let events = normalize_row(&row, &tz).unwrap();
    assert_eq!(events.len(), 2);

    let opens = &events[0];
    assert_eq!(opens.start.date_naive(), ymd(2025, 9, 7));
    assert_eq!(opens.start.to_rfc3339(), "2025-09-07T01:00:00-03:00");
    assert!(opens.start < opens.end);
    assert_eq!(opens.end - opens.start, chrono::TimeDelta::minutes(59));
    assert_eq!(opens.end.date_naive(), ymd(2025, 9, 7));

    let closes = &events[1];
    assert!(closes.start < closes.end);
    assert_eq!(closes.end.date_naive(), ymd(2025, 9, 20));
}
