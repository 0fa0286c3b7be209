//! Offline classification metrics over a precomputed predictions table.
//!
//! Per-class precision/recall/F1 are averaged with weights equal to
//! each class's true sample count, so minority classes cannot dominate
//! through division by a tiny support. A class with no predicted (or no
//! actual) members contributes 0 instead of raising.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::error::{Result, VeloriskError};
use crate::data::predictions::PredictionRecord;

/// Confusion matrix: rows = actual class, columns = predicted class.
#[derive(Debug, Clone, Serialize)]
pub struct ConfusionMatrix {
    /// Sorted union of labels seen on either side
    pub labels: Vec<String>,
    pub counts: Vec<Vec<u64>>,
}

impl ConfusionMatrix {
    pub fn get(&self, actual: &str, predicted: &str) -> u64 {
        let row = self.labels.iter().position(|l| l == actual);
        let col = self.labels.iter().position(|l| l == predicted);
        match (row, col) {
            (Some(row), Some(col)) => self.counts[row][col],
            _ => 0,
        }
    }
}

/// Metrics for one class.
#[derive(Debug, Clone, Serialize)]
pub struct ClassMetrics {
    pub label: String,
    /// Number of rows whose actual label is this class
    pub support: u64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Full offline evaluation of a predictions table.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub total: usize,
    pub accuracy: f64,
    pub precision_weighted: f64,
    pub recall_weighted: f64,
    pub f1_weighted: f64,
    pub per_class: Vec<ClassMetrics>,
    pub confusion: ConfusionMatrix,
}

/// Evaluate a predictions table.
pub fn evaluate(records: &[PredictionRecord]) -> Result<MetricsReport> {
    if records.is_empty() {
        return Err(VeloriskError::EmptyInput("predictions".to_string()));
    }

    let mut labels: Vec<String> = records
        .iter()
        .flat_map(|r| [r.actual.clone(), r.predicted.clone()])
        .collect();
    labels.sort();
    labels.dedup();

    let index: FxHashMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.as_str(), i))
        .collect();

    let n = labels.len();
    let mut counts = vec![vec![0u64; n]; n];
    let mut exact_matches = 0usize;
    for record in records {
        let row = index[record.actual.as_str()];
        let col = index[record.predicted.as_str()];
        counts[row][col] += 1;
        if record.actual == record.predicted {
            exact_matches += 1;
        }
    }

    let total = records.len();
    let accuracy = exact_matches as f64 / total as f64;

    let mut per_class = Vec::with_capacity(n);
    let mut precision_weighted = 0.0;
    let mut recall_weighted = 0.0;
    let mut f1_weighted = 0.0;
    for (i, label) in labels.iter().enumerate() {
        let true_positives = counts[i][i];
        let actual_total: u64 = counts[i].iter().sum();
        let predicted_total: u64 = counts.iter().map(|row| row[i]).sum();

        let precision = ratio_or_zero(true_positives, predicted_total);
        let recall = ratio_or_zero(true_positives, actual_total);
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };

        let weight = actual_total as f64 / total as f64;
        precision_weighted += weight * precision;
        recall_weighted += weight * recall;
        f1_weighted += weight * f1;

        per_class.push(ClassMetrics {
            label: label.clone(),
            support: actual_total,
            precision,
            recall,
            f1,
        });
    }

    Ok(MetricsReport {
        total,
        accuracy,
        precision_weighted,
        recall_weighted,
        f1_weighted,
        per_class,
        confusion: ConfusionMatrix { labels, counts },
    })
}

fn ratio_or_zero(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
