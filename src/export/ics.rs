// src/export/ics.rs

use crate::config::Config;
use crate::timeline::NormalizedEvent;
use chrono::{DateTime, TimeZone, Utc};
use icalendar::{Calendar, Component, Event, EventLike, Property};
use uuid::Uuid;

/// Calendar-level metadata for the iCalendar export.
#[derive(Debug, Clone)]
pub struct CalendarSettings {
    pub prod_id: String,
    pub name: Option<String>,
    pub description: String,
}

impl From<&Config> for CalendarSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            prod_id: cfg.prod_id.clone(),
            name: cfg.calendar_name.clone(),
            description: cfg.event_description.clone(),
        }
    }
}

impl Default for CalendarSettings {
    fn default() -> Self {
        CalendarSettings::from(&Config::default())
    }
}

/// Build the VEVENT for one marker. Each call mints a new UID; `now` stamps
/// DTSTAMP, CREATED and LAST-MODIFIED alike.
pub fn to_ical_event<Tz: TimeZone>(
    event: &NormalizedEvent<Tz>,
    description: &str,
    now: DateTime<Utc>,
) -> Event {
    let stamp = now.format("%Y%m%dT%H%M%SZ").to_string();

    Event::new()
        .uid(&Uuid::new_v4().to_string())
        .summary(&event.title)
        .description(description)
        .starts(event.start.with_timezone(&Utc))
        .ends(event.end.with_timezone(&Utc))
        .timestamp(now)
        .add_property("CREATED", &stamp)
        .add_property("LAST-MODIFIED", &stamp)
        .done()
}

/// Serialize the events as a published iCalendar document.
pub fn render_calendar<Tz: TimeZone>(
    events: &[NormalizedEvent<Tz>],
    settings: &CalendarSettings,
    now: DateTime<Utc>,
) -> String {
    let mut calendar = Calendar::new();
    calendar.append_property(Property::new("METHOD", "PUBLISH"));
    if let Some(name) = &settings.name {
        calendar.name(name);
    }

    for event in events {
        calendar.push(to_ical_event(event, &settings.description, now));
    }

    log::info!("iCalendar built with {} event(s)", events.len());

    with_prod_id(&calendar.done().to_string(), &settings.prod_id)
}

/// icalendar always writes its own PRODID line; swap the first one for ours.
fn with_prod_id(ics: &str, prod_id: &str) -> String {
    let mut replaced = false;
    ics.split_inclusive("\r\n")
        .map(|line| {
            if !replaced && line.starts_with("PRODID:") {
                replaced = true;
                format!("PRODID:{prod_id}\r\n")
            } else {
                line.to_string()
            }
        })
        .collect()
}
