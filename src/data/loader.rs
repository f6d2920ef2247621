//! CSV ingestion
//!
//! Cells are typed as integers when they parse as `i64`, as floats when they
//! parse as `f64`, and kept as strings otherwise. Empty cells leave the
//! feature unset on that record.
use csv::ReaderBuilder;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use super::dataset::{Dataset, Record, Value};
use crate::errors::CartError;

/// Types a single cell.
pub fn parse_value(cell: &str) -> Value {
    if let Ok(int) = cell.parse::<i64>() {
        Value::Int(int)
    } else if let Ok(float) = cell.parse::<f64>() {
        Value::Float(float)
    } else {
        Value::Str(cell.to_string())
    }
}

/// Reads a headed CSV, taking `label_column` as the label of every record.
pub fn read_csv<R: io::Read>(reader: R, label_column: &str) -> Result<Dataset, CartError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader.headers()?.clone();
    let label_index = headers
        .iter()
        .position(|header| header == label_column)
        .ok_or_else(|| CartError::MissingLabelColumn(label_column.to_string()))?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let mut features = BTreeMap::new();
        let mut label = String::new();

        for (index, (header, cell)) in headers.iter().zip(row.iter()).enumerate() {
            let cell = cell.trim();
            if index == label_index {
                label = cell.to_string();
            } else if !cell.is_empty() {
                features.insert(header.to_string(), parse_value(cell));
            }
        }

        records.push(Record::from_parts(features, label));
    }

    Ok(Dataset::new(records))
}

pub fn read_csv_path<P: AsRef<Path>>(path: P, label_column: &str) -> Result<Dataset, CartError> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    read_csv(file, label_column)
}
