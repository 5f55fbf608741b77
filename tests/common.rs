#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};

pub const SAMPLE_TIMELINE: &str = "\
### Timeline

| Activity | Date or Date Range |
|---|---|
| **Activity** | **Date** |
| **Mentee Applications Open** | Monday, January 26 – Tuesday, February 10, 2026, 11AM PST (19:00 UTC) |
| **Application Review Period** | January 7 – January 20, 2026 |
| **Mentee Admission Deadline** | Tuesday, March 3, 2026, 11AM PST (19:00 UTC) |

Dates may shift; watch this page.
";

pub fn rtl() -> Command {
    cargo_bin_cmd!("rtimeline")
}

/// Write `content` into `dir/name` and return the full path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path
}

/// A config path that does not exist, so the CLI runs with defaults
pub fn missing_config(dir: &Path) -> String {
    dir.join("absent.conf").to_string_lossy().to_string()
}
