//! Timezone resolution for IANA identifiers ("Asia/Kolkata", "UTC", ...).

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use chrono_tz::Tz;

pub fn resolve_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::UnknownTimezone(name.to_string()))
}

/// Like `resolve_timezone`, but an unknown zone degrades to UTC with a
/// warning. Used for the configured default, never for an explicit `--tz`.
pub fn resolve_or_utc(name: &str) -> Tz {
    match resolve_timezone(name) {
        Ok(tz) => tz,
        Err(_) => {
            log::warn!("timezone '{}' not recognized, falling back to UTC", name);
            warning(format!("Could not load timezone '{name}', falling back to UTC"));
            Tz::UTC
        }
    }
}

/// `--tz` wins (strict); otherwise the configured zone (lenient).
pub fn select_timezone(flag: Option<&str>, configured: &str) -> AppResult<Tz> {
    match flag {
        Some(name) => resolve_timezone(name),
        None => Ok(resolve_or_utc(configured)),
    }
}
