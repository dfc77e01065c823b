//! CSV export of batch results.
//!
//! The header comes from the first record only. Later records are written
//! against that header: missing keys become empty cells, extra keys are
//! dropped. The writer never quotes on its own: string cells containing a
//! comma are wrapped in double quotes by `cell` and nothing else is
//! escaped. A row with no bytes at all (a single empty cell) is the one
//! case the writer marks, as `""`.

use std::io;

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::{Map, Value};
use serotoninai_common::entities::{BatchRecord, ModelSelection};
use serotoninai_common::error::Result;
use tracing::warn;

/// Flatten nested objects into dotted keys:
/// `{"predictions": {"SERT": {"pKi": 8.1}}}` → `{"predictions.SERT.pKi": 8.1}`.
pub fn flatten_record(record: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    flatten_into(&mut out, None, record);
    out
}

fn flatten_into(out: &mut Map<String, Value>, prefix: Option<&str>, object: &Map<String, Value>) {
    for (key, value) in object {
        let path = match prefix {
            Some(p) => format!("{p}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(inner) if !inner.is_empty() => flatten_into(out, Some(&path), inner),
            other => {
                out.insert(path, other.clone());
            }
        }
    }
}

/// Flattened copies of every batch record, ready for [`to_csv`].
pub fn export_records(results: &[BatchRecord]) -> Vec<Map<String, Value>> {
    results.iter().map(|r| flatten_record(r.fields())).collect()
}

/// Serialize records as CSV text, rows joined by `\n` with no trailing
/// newline. `Ok(None)` when there is nothing to export.
pub fn to_csv(records: &[Map<String, Value>]) -> Result<Option<String>> {
    let Some(first) = records.first() else {
        return Ok(None);
    };
    let headers: Vec<&String> = first.keys().collect();

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(&headers).map_err(io::Error::from)?;

    for (idx, record) in records.iter().enumerate() {
        if idx > 0 && record.keys().ne(first.keys()) {
            warn!(row = idx, "Record keys differ from header; columns may be dropped");
        }
        let row = headers.iter().map(|h| cell(record.get(h.as_str())));
        writer.write_record(row).map_err(io::Error::from)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let mut text = String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(Some(text))
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) if s.contains(',') => format!("\"{s}\""),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// `SerotoninAI_results_{models}_{YYYY-MM-DD}.csv`, models in selection order.
pub fn export_filename(selection: &ModelSelection, date: NaiveDate) -> String {
    format!(
        "SerotoninAI_results_{}_{}.csv",
        selection.join("_"),
        date.format("%Y-%m-%d")
    )
}
