// src/export/mod.rs

mod fs_utils;
pub mod ics;
mod json_csv;
mod model;

pub use ics::{CalendarSettings, render_calendar};
pub use json_csv::{to_csv, to_json};
pub use model::EventExport;

use crate::errors::AppResult;
use crate::timeline::NormalizedEvent;
use crate::ui::messages::success;
use chrono::{TimeZone, Utc};
use clap::ValueEnum;
use std::fmt::Display;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Ics,
    Json,
    Csv,
}

impl ExportFormat {
    fn label(&self) -> &'static str {
        match self {
            ExportFormat::Ics => "iCalendar",
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
        }
    }
}

/// Serialize `events` in the requested format.
pub fn render<Tz>(
    format: ExportFormat,
    events: &[NormalizedEvent<Tz>],
    settings: &CalendarSettings,
) -> AppResult<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match format {
        ExportFormat::Ics => Ok(render_calendar(events, settings, Utc::now())),
        ExportFormat::Json => to_json(&EventExport::from_events(events)),
        ExportFormat::Csv => to_csv(&EventExport::from_events(events)),
    }
}

/// Write rendered output to `out`, or to stdout when no path is given.
pub fn write_output(
    format: ExportFormat,
    content: &str,
    out: Option<&Path>,
    force: bool,
) -> AppResult<()> {
    match out {
        Some(path) => {
            fs_utils::ensure_writable(path, force)?;
            fs::write(path, content)?;
            notify_export_success(format.label(), path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
