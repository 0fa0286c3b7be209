//! Dataset loading and normalization
//!
//! This module reads the four input files the dashboard works from:
//! the raw theft-records table, the district boundary file, the cleaned
//! tabular dataset, and the precomputed predictions table.

pub mod delimited;
pub mod districts;
pub mod frame;
pub mod predictions;
pub mod store;
pub mod thefts;

// Re-export commonly used items
pub use districts::{District, Districts};
pub use frame::{Column, DataFrame};
pub use predictions::PredictionRecord;
pub use store::DataStore;
pub use thefts::{TheftRecord, TheftTable};
