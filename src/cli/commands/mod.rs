pub mod config;
pub mod export;
pub mod init;
pub mod list;

use crate::config::Config;
use crate::errors::AppResult;
use crate::timeline::{self, NormalizedEvent};
use crate::utils::{read_input, select_timezone};
use chrono_tz::Tz;

/// Read `input`, pick the timezone and normalize the whole timeline.
pub(crate) fn load_timeline(
    input: &str,
    tz: Option<&str>,
    cfg: &Config,
) -> AppResult<Vec<NormalizedEvent<Tz>>> {
    let markdown = read_input(input)?;
    let zone = select_timezone(tz, &cfg.timezone)?;
    log::info!("normalizing '{}' in {}", input, zone.name());

    timeline::normalize_timeline(&markdown, &zone, cfg.header_labels.as_slice())
}
