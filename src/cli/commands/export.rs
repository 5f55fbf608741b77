use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{self, CalendarSettings};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        tz,
        format,
        out,
        force,
    } = cmd
    {
        let events = super::load_timeline(input, tz.as_deref(), cfg)?;
        let settings = CalendarSettings::from(cfg);
        let content = export::render(*format, &events, &settings)?;
        export::write_output(*format, &content, out.as_deref(), *force)?;
    }
    Ok(())
}
