//! Generic delimited-table loader with per-column type inference.
//!
//! The cleaned dataset mixes numeric and categorical columns; the
//! correlation reporter only cares about the numeric ones. A column is
//! numeric when every non-empty cell parses as a float and at least one
//! cell is non-empty. Empty cells become missing values.

use std::path::Path;

use crate::core::error::{Result, VeloriskError};
use crate::data::delimited::{self, Header};

/// A loaded column: numeric with missing values, or raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<Option<f64>>),
    Text(Vec<String>),
}

/// A small in-memory table with named, typed columns.
#[derive(Debug, Clone)]
pub struct DataFrame {
    names: Vec<String>,
    columns: Vec<Column>,
    rows: usize,
}

impl DataFrame {
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Name/values pairs for the numeric columns only.
    pub fn numeric_columns(&self) -> Vec<(&str, &[Option<f64>])> {
        self.names
            .iter()
            .zip(&self.columns)
            .filter_map(|(name, column)| match column {
                Column::Numeric(values) => Some((name.as_str(), values.as_slice())),
                Column::Text(_) => None,
            })
            .collect()
    }

    /// The first `limit` rows rendered back to display strings.
    pub fn preview(&self, limit: usize) -> Vec<Vec<String>> {
        let shown = limit.min(self.rows);
        (0..shown)
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| match column {
                        Column::Numeric(values) => values[row]
                            .map(|v| format_number(v))
                            .unwrap_or_default(),
                        Column::Text(values) => values[row].clone(),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Render a float without a trailing ".0" for whole numbers.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Load a UTF-8 delimited table and infer column types.
pub fn load_dataframe(path: &Path) -> Result<DataFrame> {
    let text = delimited::read_text(path)?;
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header = match lines.next() {
        Some(line) => Header::parse(line),
        None => return Err(VeloriskError::EmptyInput(path.display().to_string())),
    };
    let names: Vec<String> = header.names().to_vec();
    let width = names.len();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); width];
    let mut rows = 0usize;
    for line in lines {
        let mut fields = delimited::split_fields(line);
        // ragged rows are padded with empties rather than dropped
        fields.resize(width, String::new());
        for (column, field) in cells.iter_mut().zip(fields) {
            column.push(field);
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(VeloriskError::EmptyInput(path.display().to_string()));
    }

    let columns = cells.into_iter().map(infer_column).collect();
    Ok(DataFrame {
        names,
        columns,
        rows,
    })
}

fn infer_column(raw: Vec<String>) -> Column {
    let mut parsed = Vec::with_capacity(raw.len());
    let mut any_value = false;
    let mut numeric = true;
    for cell in &raw {
        if cell.is_empty() {
            parsed.push(None);
        } else if let Ok(value) = cell.parse::<f64>() {
            parsed.push(Some(value));
            any_value = true;
        } else {
            numeric = false;
            break;
        }
    }
    if numeric && any_value {
        Column::Numeric(parsed)
    } else {
        Column::Text(raw)
    }
}
