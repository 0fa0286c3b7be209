//! Statistical analysis over the loaded datasets
//!
//! This module holds the risk heuristic, the Pearson correlation
//! reporter, and the offline classification metrics. Everything here is
//! pure computation over in-memory tables.

pub mod correlation;
pub mod metrics;
pub mod risk;

// Re-export commonly used items
pub use correlation::{CorrelationMatrix, correlation_matrix};
pub use metrics::{ConfusionMatrix, MetricsReport, evaluate};
pub use risk::{RiskAssessment, RiskLevel, assess_risk};
