//! velorisk - terminal dashboard for exploring bicycle theft risk in Berlin
//!
//! The crate loads static CSV/GeoJSON datasets (historical theft
//! reports, district boundaries, a cleaned feature table, and offline
//! model predictions) and renders summary statistics, a Pearson
//! correlation study, a rule-based theft-risk lookup, and model
//! performance metrics - either as an interactive navigation shell or
//! one page at a time for scripting.

pub mod analysis;
pub mod config;
pub mod core;
pub mod data;
pub mod reporting;
pub mod ui;

// Re-export the most commonly used items at the crate root
pub use crate::analysis::{RiskAssessment, RiskLevel, assess_risk};
pub use crate::core::{Result, VeloriskError};
pub use crate::data::{DataStore, District, TheftRecord};
pub use crate::ui::{Page, RenderOptions};
