//! Date extraction from free-form cell text.
//!
//! Cells look like `Tuesday, February 10, 2026, 11AM PST (19:00 UTC)`. The
//! first `[Weekday, ]Month Day, Year` span is cut out and the rest (time of
//! day, zone names, UTC conversions) is thrown away. The zone named in the
//! text is never used: all markers are placed in the caller's timezone.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted layouts for an extracted date, most specific first so a shorter
/// layout never wins on a prefix of a longer one.
pub const DATE_FORMATS: [&str; 4] = [
    "%A, %B %d, %Y", // Tuesday, February 10, 2026
    "%A, %b %d, %Y", // Tuesday, Feb 10, 2026
    "%B %d, %Y",     // February 10, 2026
    "%b %d, %Y",     // Feb 10, 2026
];

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:(?:(?:mon|tues|wednes|thurs|fri|satur|sun)day|mon|tue|wed|thu|fri|sat|sun),\s+)?",
        r"(?P<date>(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?",
        r"|sep(?:tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)",
        r"\s+\d{1,2},\s+\d{4})\b",
    ))
    .expect("valid date shape pattern")
});

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}\b").expect("valid year pattern"));

// En dash only: a plain hyphen never denotes a range.
static RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+–\s+(.+)$").expect("valid range pattern"));

/// How a date cell is to be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateCell<'a> {
    Single(&'a str),
    Range { start: String, end: &'a str },
}

/// Split a cell into a single date or a range. For ranges, a start side
/// without a year borrows the year of the end side.
pub fn classify(date_text: &str) -> DateCell<'_> {
    let Some(caps) = RANGE.captures(date_text) else {
        return DateCell::Single(date_text);
    };
    let (Some(start), Some(end)) = (caps.get(1), caps.get(2)) else {
        return DateCell::Single(date_text);
    };

    let start = start.as_str().trim();
    let end = end.as_str().trim();

    DateCell::Range {
        start: inherit_year(start, end),
        end,
    }
}

/// Append `, <year>` to `start` when it has no year and `end` has one.
pub fn inherit_year(start: &str, end: &str) -> String {
    match (find_year(start), find_year(end)) {
        (None, Some(year)) => format!("{start}, {year}"),
        _ => start.to_string(),
    }
}

pub fn find_year(text: &str) -> Option<&str> {
    YEAR.find(text).map(|m| m.as_str())
}

/// First date-shaped span in `raw`, if any.
pub fn extract_date_text(raw: &str) -> Option<&str> {
    DATE_SHAPE.find(raw).map(|m| m.as_str())
}

/// Parse the date embedded in `raw`. `title` is only used for diagnostics.
///
/// The weekday name is advisory: when it disagrees with the date, the
/// `Month Day, Year` part alone decides.
pub fn parse_date(raw: &str, title: &str) -> AppResult<NaiveDate> {
    let caps = DATE_SHAPE.captures(raw).ok_or_else(|| AppError::DateParse {
        title: title.to_string(),
        text: raw.to_string(),
        reason: "no recognizable date",
    })?;
    let (Some(clean), Some(bare)) = (caps.get(0), caps.name("date")) else {
        return Err(AppError::DateParse {
            title: title.to_string(),
            text: raw.to_string(),
            reason: "no recognizable date",
        });
    };

    let date = parse_with(clean.as_str(), &DATE_FORMATS)
        .or_else(|| {
            let date = parse_with(bare.as_str(), &DATE_FORMATS[2..])?;
            if bare.start() != clean.start() {
                log::warn!(
                    "'{}': weekday in \"{}\" does not match {}, using the date",
                    title,
                    clean.as_str(),
                    date
                );
            }
            Some(date)
        })
        .ok_or_else(|| AppError::DateParse {
            title: title.to_string(),
            text: raw.to_string(),
            reason: "date matches no accepted format",
        })?;

    log::debug!("'{}': \"{}\" -> {}", title, clean.as_str(), date);
    Ok(date)
}

fn parse_with(text: &str, formats: &[&str]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}
