pub mod input;
pub mod path;
pub mod table;
pub mod timezone;

pub use input::read_input;
pub use timezone::{resolve_or_utc, resolve_timezone, select_timezone};
