//! Compound-name extraction from uploaded CSV text.
//!
//! The reader runs with quoting off, so a value containing a comma shifts
//! every later column of its row. Compound names are assumed to be
//! comma-free.

use csv::{ReaderBuilder, StringRecord};
use serotoninai_common::error::{Result, SerotoninError};
use tracing::debug;

/// Header names recognised as the compound column, in priority order.
pub const COMPOUND_HEADERS: [&str; 3] = ["compound_name", "compoundname", "name"];

pub const NO_COMPOUNDS: &str = "No compounds found in file";

/// Index of the compound column for a header record; column 0 when no
/// recognised header is present.
pub fn compound_column(header: &StringRecord) -> usize {
    let header: Vec<String> = header.iter().map(|cell| cell.trim().to_lowercase()).collect();

    COMPOUND_HEADERS
        .iter()
        .find_map(|wanted| header.iter().position(|cell| cell == wanted))
        .unwrap_or(0)
}

/// A whitespace-only line. Empty lines never reach us; the reader skips them.
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

/// Ordered, non-empty compound names from every data row. An empty or
/// header-only file yields an empty list.
pub fn extract_compounds(text: &str) -> Vec<String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut records = reader
        .records()
        .filter_map(|record| match record {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("Skipping unreadable row: {}", e);
                None
            }
        })
        .filter(|record| !is_blank(record));

    let Some(header) = records.next() else {
        return Vec::new();
    };
    let column = compound_column(&header);
    debug!(column, "Selected compound column");

    records
        .filter_map(|record| record.get(column).map(|value| value.trim().to_string()))
        .filter(|value| !value.is_empty())
        .collect()
}

/// Like [`extract_compounds`], but an empty result is a validation error so
/// callers can refuse the batch before contacting the backend.
pub fn parse_compounds(text: &str) -> Result<Vec<String>> {
    let compounds = extract_compounds(text);
    if compounds.is_empty() {
        return Err(SerotoninError::validation(NO_COMPOUNDS));
    }
    Ok(compounds)
}
