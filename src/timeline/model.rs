use chrono::{DateTime, TimeZone};
use serde::Serialize;

/// A `| **Title** | Date text |` row as found in the markdown, before any
/// date interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub title: String,
    pub date_text: String,
}

impl RawRow {
    pub fn new(title: impl Into<String>, date_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date_text: date_text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Opens,
    Closes,
}

impl EventKind {
    /// Prefix used in the event title ("Opens: ...", "Closes: ...").
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Opens => "Opens",
            EventKind::Closes => "Closes",
        }
    }

    pub fn title_for(&self, activity: &str) -> String {
        format!("{}: {}", self.label(), activity)
    }
}

/// A fixed-duration marker event. `start < end`, both on the same local day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEvent<Tz: TimeZone> {
    pub title: String,
    pub kind: EventKind,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}
