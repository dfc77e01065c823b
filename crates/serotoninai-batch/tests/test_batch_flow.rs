//! End-to-end batch flow without a backend: CSV in, response records, CSV out.
//!
//! Run with: cargo test --package serotoninai-batch --test test_batch_flow

use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};
use serotoninai_batch::export::export_records;
use serotoninai_batch::{build_preview, extract_compounds, to_csv};
use serotoninai_common::{BatchResponse, ModelId, ModelSelection};

#[test]
fn test_upload_preview_and_export() {
    let compounds = extract_compounds("name\nFluoxetine\nSertraline");
    assert_eq!(compounds, vec!["Fluoxetine", "Sertraline"]);

    let selection = ModelSelection::from_ids([ModelId::Sert]);
    assert_eq!(selection.backend_models(), vec!["SERT"]);

    let response: BatchResponse = serde_json::from_value(json!({
        "results": [
            {"compound": "Fluoxetine", "predictions": {"SERT": {"pKi": 8.7, "isActive": true}}},
            {"compound": "Sertraline", "predictions": {"SERT": {"pKi": 9.4, "isActive": true}}}
        ]
    }))
    .unwrap();

    let table = build_preview(&response.results, &selection);
    assert_eq!(table.headers, vec!["Compound", "Status", "SERT pKi", "SERT Active"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1], vec!["Sertraline", "OK", "9.4", "Yes"]);

    let csv = to_csv(&export_records(&response.results)).unwrap().unwrap();
    assert_eq!(
        csv,
        "compound,predictions.SERT.pKi,predictions.SERT.isActive\nFluoxetine,8.7,true\nSertraline,9.4,true"
    );
}

#[test]
fn test_export_splits_back_into_original_fields() {
    let records: Vec<Map<String, Value>> = [
        json!({"compound": "Psilocybin", "class": "BBB+", "probability": 0.81, "value": 92}),
        json!({"compound": "Buspirone", "class": "BBB-", "probability": 0.12, "value": 47}),
    ]
    .into_iter()
    .map(|v| v.as_object().cloned().unwrap())
    .collect();

    let csv = to_csv(&records).unwrap().unwrap();
    let mut lines = csv.split('\n');
    let header: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(header, vec!["compound", "class", "probability", "value"]);

    for (line, record) in lines.zip(&records) {
        let cells: Vec<&str> = line.split(',').collect();
        for (key, cell) in header.iter().zip(cells) {
            let expected = match &record[*key] {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            assert_eq!(cell, expected);
        }
    }
}

#[test]
fn test_header_only_upload_has_nothing_to_send() {
    assert!(extract_compounds("compound_name\n\n").is_empty());
}
