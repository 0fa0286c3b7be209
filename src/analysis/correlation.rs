//! Pearson correlation over the numeric columns of a dataset.
//!
//! Missing values are handled by pairwise complete-observation
//! deletion: for each column pair, only rows where both values are
//! present enter the computation.

use serde::Serialize;

use crate::core::error::{Result, VeloriskError};
use crate::data::frame::DataFrame;

/// Symmetric correlation matrix over named numeric columns.
///
/// `None` marks an undefined coefficient (a constant column or fewer
/// than two complete observations).
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values[row][col]
    }
}

/// Compute the Pearson correlation matrix of a dataset's numeric
/// columns. A dataset without numeric columns is an error value, not a
/// panic - the caller decides how to report it.
pub fn correlation_matrix(frame: &DataFrame, source: &str) -> Result<CorrelationMatrix> {
    let numeric = frame.numeric_columns();
    if numeric.is_empty() {
        return Err(VeloriskError::NoNumericColumns(source.to_string()));
    }

    let labels: Vec<String> = numeric.iter().map(|(name, _)| name.to_string()).collect();
    let n = numeric.len();
    let mut values = vec![vec![None; n]; n];

    for i in 0..n {
        // identical columns correlate exactly, with no float noise
        values[i][i] = Some(1.0);
        for j in (i + 1)..n {
            let r = pearson(numeric[i].1, numeric[j].1);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix { labels, values })
}

/// Pearson r of two columns under pairwise deletion.
///
/// Returns `None` when fewer than two complete pairs remain or either
/// column is constant over the complete pairs.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(covariance / (var_x.sqrt() * var_y.sqrt()))
}
