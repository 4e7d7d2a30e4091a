//! CSV text → named rows
//!
//! Published spreadsheet exports are loosely formed: quoted cells may carry
//! commas and line breaks, line endings vary, and trailing cells go missing.
//! None of that is an error here; a row that cannot be read is dropped.

use csv::{ReaderBuilder, StringRecord};
use shared::hotel::RawRow;

/// Parse CSV text into rows keyed by the (trimmed) header names
///
/// - blank and whitespace-only lines are dropped
/// - missing trailing cells become empty strings, extra cells are ignored
/// - all values are trimmed
pub fn parse_table(text: &str) -> Vec<RawRow> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(line = index + 1, error = %e, "Skipping unreadable CSV record");
                continue;
            }
        };

        if is_blank(&record) {
            continue;
        }

        match &headers {
            None => headers = Some(record.iter().map(|h| h.trim().to_string()).collect()),
            Some(names) => rows.push(to_row(names, &record)),
        }
    }

    rows
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|cell| cell.trim().is_empty())
}

fn to_row(headers: &[String], record: &StringRecord) -> RawRow {
    headers
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty())
        .map(|(i, name)| {
            let value = record.get(i).unwrap_or("").trim().to_string();
            (name.clone(), value)
        })
        .collect()
}
