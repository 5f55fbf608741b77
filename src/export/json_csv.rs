// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::EventExport;

/// JSON pretty-printed, trailing newline included.
pub fn to_json(events: &[EventExport]) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(events)?;
    json.push('\n');
    Ok(json)
}

/// CSV with a header row (taken from the serde field names).
pub fn to_csv(events: &[EventExport]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for item in events {
        wtr.serialize(item)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
