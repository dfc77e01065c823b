//! Quick-look table of a batch response.
//!
//! Columns: Compound, Status, then per selected model (fixed order SERT,
//! BBB, HIA) the headline fields. Receptor predictions are export-only.

use serde::Serialize;
use serde_json::{Map, Value};
use serotoninai_common::entities::{BatchRecord, ModelId, ModelSelection};

const MISSING: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PreviewTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// (model family, backend model name, [(column header, field name)])
type ColumnGroup = (ModelId, &'static str, &'static [(&'static str, &'static str)]);

const COLUMN_GROUPS: [ColumnGroup; 3] = [
    (ModelId::Sert, "SERT", &[("SERT pKi", "pKi"), ("SERT Active", "isActive")]),
    (ModelId::Bbb, "BBB", &[("BBB Class", "classification"), ("BBB Prob", "probability")]),
    (
        ModelId::Hia,
        "HIA",
        &[("HIA Class", "classification"), ("HIA Value", "value"), ("HIA Prob", "probability")],
    ),
];

pub fn build_preview(results: &[BatchRecord], selection: &ModelSelection) -> PreviewTable {
    let groups: Vec<&ColumnGroup> = COLUMN_GROUPS
        .iter()
        .filter(|(id, _, _)| selection.contains(*id))
        .collect();

    let mut headers = vec!["Compound".to_string(), "Status".to_string()];
    for (_, _, columns) in &groups {
        headers.extend(columns.iter().map(|(header, _)| header.to_string()));
    }

    let rows = results
        .iter()
        .map(|record| {
            let mut row = vec![
                record.compound().unwrap_or_default().to_string(),
                status(record),
            ];
            for (_, model, columns) in &groups {
                let prediction = record.prediction(model);
                for (_, field) in columns.iter() {
                    row.push(column_value(prediction, field));
                }
            }
            row
        })
        .collect();

    PreviewTable { headers, rows }
}

fn status(record: &BatchRecord) -> String {
    match record.error() {
        Some(err) => format!("Error: {err}"),
        None => "OK".to_string(),
    }
}

fn column_value(prediction: Option<&Map<String, Value>>, field: &str) -> String {
    let Some(prediction) = prediction else {
        return MISSING.to_string();
    };
    if field == "isActive" {
        return match prediction.get(field).and_then(Value::as_bool) {
            Some(true) => "Yes".to_string(),
            _ => "No".to_string(),
        };
    }
    match prediction.get(field) {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
