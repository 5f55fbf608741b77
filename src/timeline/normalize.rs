// src/timeline/normalize.rs

use super::dates::{self, DateCell};
use super::model::{EventKind, NormalizedEvent, RawRow};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone};

/// Wall-clock window, as (hour, minute) pairs, of one marker event.
#[derive(Debug, Clone, Copy)]
pub struct MarkerWindow {
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl MarkerWindow {
    pub fn duration(&self) -> TimeDelta {
        let minutes = |(h, m): (u32, u32)| i64::from(h * 60 + m);
        TimeDelta::minutes(minutes(self.end) - minutes(self.start))
    }
}

/// Longest clock jump searched when a marker time falls in a DST gap.
const MAX_GAP_MINUTES: i64 = 3 * 60;

/// Opening marker: just after midnight on the first day.
pub const OPENS_WINDOW: MarkerWindow = MarkerWindow {
    start: (0, 1),
    end: (1, 0),
};

/// Closing marker: the last hour of the deadline day.
pub const CLOSES_WINDOW: MarkerWindow = MarkerWindow {
    start: (23, 0),
    end: (23, 59),
};

/// Turn one table row into its marker events.
///
/// - range (`start – end`) → `Opens:` on the start day + `Closes:` on the end day
/// - single date → one `Closes:` event (single dates are deadlines)
///
/// A range side that fails to parse fails the row; it is never retried as a
/// single date.
pub fn normalize_row<Tz: TimeZone>(
    row: &RawRow,
    tz: &Tz,
) -> AppResult<Vec<NormalizedEvent<Tz>>> {
    match dates::classify(&row.date_text) {
        DateCell::Range { start, end } => {
            let start_date = dates::parse_date(&start, &row.title)?;
            let end_date = dates::parse_date(end, &row.title)?;

            if end_date < start_date {
                log::warn!(
                    "'{}' closes ({}) before it opens ({})",
                    row.title,
                    end_date,
                    start_date
                );
            }

            Ok(vec![
                marker(&row.title, EventKind::Opens, start_date, tz)?,
                marker(&row.title, EventKind::Closes, end_date, tz)?,
            ])
        }
        DateCell::Single(text) => {
            let date = dates::parse_date(text, &row.title)?;
            Ok(vec![marker(&row.title, EventKind::Closes, date, tz)?])
        }
    }
}

/// Normalize every row, in order. The first failing row aborts the whole
/// conversion and no partial result is returned.
pub fn normalize_rows<Tz, I>(rows: I, tz: &Tz) -> AppResult<Vec<NormalizedEvent<Tz>>>
where
    Tz: TimeZone,
    I: IntoIterator<Item = RawRow>,
{
    let mut events = Vec::new();
    for row in rows {
        events.extend(normalize_row(&row, tz)?);
    }
    Ok(events)
}

fn marker<Tz: TimeZone>(
    title: &str,
    kind: EventKind,
    date: NaiveDate,
    tz: &Tz,
) -> AppResult<NormalizedEvent<Tz>> {
    let window = match kind {
        EventKind::Opens => OPENS_WINDOW,
        EventKind::Closes => CLOSES_WINDOW,
    };

    let start = local_time(tz, date, window.start)?;
    let mut end = local_time(tz, date, window.end)?;

    // A DST gap can push start onto (or past) end; keep the marker's length.
    if end <= start {
        end = start.clone() + window.duration();
    }

    Ok(NormalizedEvent {
        title: kind.title_for(title),
        kind,
        start,
        end,
    })
}

/// Resolve a wall-clock time on `date`. Ambiguous times (DST fold) take the
/// earliest instant; times inside a DST gap move forward to the first
/// minute that exists.
fn local_time<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    (h, m): (u32, u32),
) -> AppResult<DateTime<Tz>> {
    let naive = date
        .and_hms_opt(h, m, 0)
        .ok_or_else(|| AppError::InvalidLocalTime {
            moment: format!("{date} {h:02}:{m:02}"),
        })?;

    let mut candidate = naive;
    for _ in 0..=MAX_GAP_MINUTES {
        if let Some(dt) = tz.from_local_datetime(&candidate).earliest() {
            if candidate != naive {
                log::warn!("{} does not exist locally, using {}", naive, candidate);
            }
            return Ok(dt);
        }
        candidate += TimeDelta::minutes(1);
    }

    Err(AppError::InvalidLocalTime {
        moment: naive.to_string(),
    })
}
