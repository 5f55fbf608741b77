// src/export/model.rs

use crate::timeline::{EventKind, NormalizedEvent};
use chrono::TimeZone;
use serde::Serialize;
use std::fmt::Display;

/// Flat record for JSON / CSV export. Timestamps are RFC 3339 with the
/// offset of the timezone the timeline was normalized in.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub title: String,
    pub kind: EventKind,
    pub start: String,
    pub end: String,
}

impl EventExport {
    pub fn from_event<Tz>(event: &NormalizedEvent<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            title: event.title.clone(),
            kind: event.kind,
            start: event.start.to_rfc3339(),
            end: event.end.to_rfc3339(),
        }
    }

    pub fn from_events<Tz>(events: &[NormalizedEvent<Tz>]) -> Vec<Self>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        events.iter().map(Self::from_event).collect()
    }
}
