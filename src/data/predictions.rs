//! Loader for the batch-precomputed predictions table.
//!
//! The table is produced offline by the model-training notebooks and
//! only ever read here. Labels are compared as strings; label-encoded
//! integers arrive as digit strings and need no conversion.

use std::path::Path;

use crate::core::constants::prediction_columns;
use crate::core::error::{Result, VeloriskError};
use crate::data::delimited::{self, Header};

/// One (actual, predicted) label pair from an offline batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRecord {
    pub actual: String,
    pub predicted: String,
}

/// Load the predictions table. Both label columns are required.
pub fn load_predictions(path: &Path) -> Result<Vec<PredictionRecord>> {
    let text = delimited::read_text(path)?;
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header = match lines.next() {
        Some(line) => Header::parse(line),
        None => return Err(VeloriskError::EmptyInput(path.display().to_string())),
    };
    let actual_idx = header.require(path, prediction_columns::ACTUAL)?;
    let predicted_idx = header.require(path, prediction_columns::PREDICTED)?;

    let mut records = Vec::new();
    for (number, line) in lines.enumerate() {
        let fields = delimited::split_fields(line);
        let actual = fields.get(actual_idx).cloned().unwrap_or_default();
        let predicted = fields.get(predicted_idx).cloned().unwrap_or_default();
        match (actual.is_empty(), predicted.is_empty()) {
            (true, true) => continue,
            (false, false) => records.push(PredictionRecord { actual, predicted }),
            _ => {
                return Err(VeloriskError::Parse(format!(
                    "row {} of '{}' has only one of the two label columns",
                    number + 1,
                    path.display()
                )));
            }
        }
    }

    if records.is_empty() {
        return Err(VeloriskError::EmptyInput(path.display().to_string()));
    }
    Ok(records)
}
