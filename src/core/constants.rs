/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes magic strings and numbers used across the
/// application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful output with section headings
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain text without colors or emojis
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Risk heuristic constants
pub mod risk {
    /// Half-width of the high-risk hour window around the mode hour
    pub const DEFAULT_WINDOW_HOURS: u8 = 1;
    /// Largest sensible window half-width (covers the whole day)
    pub const MAX_WINDOW_HOURS: u8 = 23;
    /// Highest valid hour-of-day value
    pub const MAX_HOUR: u8 = 23;
}

/// Identifier handling constants
pub mod identifiers {
    /// Fixed width of a zero-padded LOR location code
    pub const LOR_ID_WIDTH: usize = 8;
}

/// Theft-records table column names (Berlin open-data export)
pub mod theft_columns {
    /// LOR location code of the theft site
    pub const LOCATION: &str = "LOR";
    /// Bicycle type category
    pub const BIKE_TYPE: &str = "ART_DES_FAHRRADS";
    /// Hour of day at which the offense started
    pub const HOUR: &str = "TATZEIT_ANFANG_STUNDE";
    /// Date the report was filed
    pub const REPORTED: &str = "ANGELEGT_AM";
    /// Date the offense started
    pub const OFFENSE_DATE: &str = "TATZEIT_ANFANG_DATUM";
    /// Reported damage in EUR
    pub const DAMAGE: &str = "SCHADENSHOEHE";

    /// Columns the loader refuses to run without
    pub const REQUIRED: [&str; 3] = [LOCATION, BIKE_TYPE, HOUR];
}

/// Predictions table column names
pub mod prediction_columns {
    /// Ground-truth label column
    pub const ACTUAL: &str = "Actual";
    /// Model output label column
    pub const PREDICTED: &str = "Predicted";
}

/// District boundary file property keys
pub mod district_properties {
    /// Default GeoJSON property holding the location code
    pub const DEFAULT_ID_KEY: &str = "LOR";
    /// Default GeoJSON property holding the district name
    pub const DEFAULT_NAME_KEY: &str = "NAME";
}

/// Default dataset file locations, relative to the data directory
pub mod data_files {
    /// Data directory default
    pub const DEFAULT_DATA_DIR: &str = "data";
    /// Raw historical theft records (Latin-1 delimited text)
    pub const THEFT_RECORDS: &str = "bike_thefts.csv";
    /// District boundaries (GeoJSON)
    pub const DISTRICTS: &str = "districts.geojson";
    /// Cleaned tabular dataset (UTF-8 delimited text)
    pub const CLEANED_DATASET: &str = "cleaned_dataset.csv";
    /// Batch-precomputed predictions (UTF-8 delimited text)
    pub const PREDICTIONS: &str = "predictions.csv";
}

/// Display and formatting constants
pub mod display {
    /// Number of rows shown in dataset previews
    pub const PREVIEW_ROWS: usize = 5;
    /// Decimal places for correlation coefficients
    pub const CORRELATION_DECIMALS: usize = 4;
    /// Decimal places for classification metrics
    pub const METRIC_DECIMALS: usize = 4;
    /// Number of top bicycle-type categories on the summary page
    pub const TOP_BIKE_TYPES: usize = 5;
    /// Fallback terminal width when detection fails
    pub const FALLBACK_TERM_WIDTH: usize = 100;
}
