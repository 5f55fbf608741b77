//! Markdown table row extraction.
//!
//! Only lines shaped like `| **Title** | Date text |` are kept. Anything else
//! (headings, prose, separator rows, headers without bold markup) is skipped
//! silently: this is a filter, not a markdown parser.

use super::model::RawRow;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::Lines;

/// Titles treated as the table's own header row when no list is configured.
pub const DEFAULT_HEADER_LABELS: &[&str] = &["Activity"];

static TABLE_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\|\s*\*\*(.+?)\*\*\s*\|\s*(.+?)\s*\|").expect("valid table row pattern")
});

/// Lazy, single-pass iterator over the table rows of a markdown document.
pub struct RowExtractor<'a> {
    lines: Lines<'a>,
    header_labels: Vec<String>,
}

impl<'a> RowExtractor<'a> {
    pub fn new(markdown: &'a str) -> Self {
        Self {
            lines: markdown.lines(),
            header_labels: DEFAULT_HEADER_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replace the header labels dropped by the extractor.
    pub fn with_header_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_labels = labels.into_iter().map(Into::into).collect();
        self
    }
}

impl Iterator for RowExtractor<'_> {
    type Item = RawRow;

    fn next(&mut self) -> Option<RawRow> {
        for line in self.lines.by_ref() {
            let Some(row) = parse_row(line) else {
                continue;
            };

            if is_header_row(&row.title, &self.header_labels) {
                log::debug!("skipping header row '{}'", row.title);
                continue;
            }

            log::debug!("row '{}' -> \"{}\"", row.title, row.date_text);
            return Some(row);
        }
        None
    }
}

/// Extract rows using the default header labels.
pub fn extract_rows(markdown: &str) -> RowExtractor<'_> {
    RowExtractor::new(markdown)
}

/// Match a single line against the table row shape.
pub fn parse_row(line: &str) -> Option<RawRow> {
    let caps = TABLE_ROW.captures(line)?;
    let title = caps.get(1)?.as_str().trim();
    let date_text = caps.get(2)?.as_str().trim();
    Some(RawRow::new(title, date_text))
}

pub fn is_header_row<S: AsRef<str>>(title: &str, labels: &[S]) -> bool {
    labels
        .iter()
        .any(|label| label.as_ref().eq_ignore_ascii_case(title))
}
