//! Markdown milestone table → normalized calendar events.
//!
//! `rows` pulls `(title, date text)` pairs out of the markdown, `dates` digs a
//! calendar date out of the noisy cell text and `normalize` turns each pair
//! into fixed-window marker events in the caller's timezone.

pub mod dates;
mod model;
pub mod normalize;
pub mod rows;

pub use model::{EventKind, NormalizedEvent, RawRow};
pub use normalize::{normalize_row, normalize_rows};
pub use rows::{RowExtractor, extract_rows};

use crate::errors::AppResult;
use chrono::TimeZone;

/// Full conversion of a markdown document. `header_labels` are the titles
/// dropped as the table's own header row.
pub fn normalize_timeline<Tz, S>(
    markdown: &str,
    tz: &Tz,
    header_labels: &[S],
) -> AppResult<Vec<NormalizedEvent<Tz>>>
where
    Tz: TimeZone,
    S: AsRef<str>,
{
    let rows = RowExtractor::new(markdown)
        .with_header_labels(header_labels.iter().map(|s| s.as_ref().to_string()));
    let events = normalize_rows(rows, tz)?;

    log::info!("timeline normalized into {} event(s)", events.len());
    Ok(events)
}
