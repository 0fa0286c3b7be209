//! Read-only data handle for the dashboard's input files.
//!
//! Pages receive a `DataStore` and load what they need per render.
//! Nothing is cached between renders - the tables are small, and a
//! fresh load keeps every render independent of the previous one.

use std::path::PathBuf;

use crate::config::Config;
use crate::core::error::Result;
use crate::data::districts::{self, Districts};
use crate::data::frame::{self, DataFrame};
use crate::data::predictions::{self, PredictionRecord};
use crate::data::thefts::{self, TheftTable};
use crate::ui::ProgressReporter;

/// Resolved input file locations plus district property keys.
#[derive(Debug, Clone)]
pub struct DataStore {
    theft_records: PathBuf,
    districts: PathBuf,
    cleaned_dataset: PathBuf,
    predictions: PathBuf,
    district_id_property: String,
    district_name_property: String,
}

impl DataStore {
    pub fn from_config(config: &Config) -> Self {
        Self {
            theft_records: config.theft_records_path(),
            districts: config.districts_path(),
            cleaned_dataset: config.cleaned_dataset_path(),
            predictions: config.predictions_path(),
            district_id_property: config.district_id_property().to_string(),
            district_name_property: config.district_name_property().to_string(),
        }
    }

    /// Load the raw theft-records table.
    pub fn load_thefts(&self, progress: Option<&ProgressReporter>) -> Result<TheftTable> {
        thefts::load_theft_records(&self.theft_records, progress)
    }

    /// Load the district table.
    pub fn load_districts(&self) -> Result<Districts> {
        districts::load_districts(
            &self.districts,
            &self.district_id_property,
            &self.district_name_property,
        )
    }

    /// Load the cleaned tabular dataset.
    pub fn load_dataset(&self) -> Result<DataFrame> {
        frame::load_dataframe(&self.cleaned_dataset)
    }

    /// Load the precomputed predictions table.
    pub fn load_predictions(&self) -> Result<Vec<PredictionRecord>> {
        predictions::load_predictions(&self.predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_resolves_paths_from_config() {
        let config = Config {
            data_dir: Some("/srv/data".to_string()),
            ..Config::default()
        };
        let store = DataStore::from_config(&config);

        assert_eq!(store.theft_records, PathBuf::from("/srv/data/bike_thefts.csv"));
        assert_eq!(store.predictions, PathBuf::from("/srv/data/predictions.csv"));
        assert_eq!(store.district_id_property, "LOR");
        assert_eq!(store.district_name_property, "NAME");
    }

    #[test]
    fn test_missing_files_surface_as_errors() {
        let config = Config {
            data_dir: Some("/definitely/not/here".to_string()),
            ..Config::default()
        };
        let store = DataStore::from_config(&config);

        assert!(store.load_thefts(None).is_err());
        assert!(store.load_districts().is_err());
        assert!(store.load_dataset().is_err());
        assert!(store.load_predictions().is_err());
    }
}
