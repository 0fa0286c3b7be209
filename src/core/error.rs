use std::fmt;

/// Comprehensive error types for velorisk operations
#[derive(Debug)]
pub enum VeloriskError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// File not found error
    FileNotFound(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON parsing error (district boundary files)
    Json(serde_json::Error),

    /// Expected column or property missing from an input file
    Schema { file: String, column: String },

    /// Malformed value in an input file
    Parse(String),

    /// Dataset has no numeric columns to correlate
    NoNumericColumns(String),

    /// Input file contained no usable rows
    EmptyInput(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// Interactive prompt error
    Dialog(dialoguer::Error),
}

impl fmt::Display for VeloriskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VeloriskError::Io(err) => write!(f, "IO error: {err}"),
            VeloriskError::Config(msg) => write!(f, "Configuration error: {msg}"),
            VeloriskError::FileNotFound(path) => write!(f, "File not found: {path}"),
            VeloriskError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            VeloriskError::Json(err) => write!(f, "JSON parsing error: {err}"),
            VeloriskError::Schema { file, column } => {
                write!(f, "Schema error: column '{column}' missing from '{file}'")
            }
            VeloriskError::Parse(msg) => write!(f, "Parse error: {msg}"),
            VeloriskError::NoNumericColumns(file) => {
                write!(f, "No numeric columns: '{file}' has nothing to correlate")
            }
            VeloriskError::EmptyInput(file) => {
                write!(f, "Empty input: '{file}' contains no usable rows")
            }
            VeloriskError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            VeloriskError::Dialog(err) => write!(f, "Prompt error: {err}"),
        }
    }
}

impl std::error::Error for VeloriskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VeloriskError::Io(err) => Some(err),
            VeloriskError::TomlParsing(err) => Some(err),
            VeloriskError::Json(err) => Some(err),
            VeloriskError::Dialog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VeloriskError {
    fn from(err: std::io::Error) -> Self {
        VeloriskError::Io(err)
    }
}

impl From<toml::de::Error> for VeloriskError {
    fn from(err: toml::de::Error) -> Self {
        VeloriskError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for VeloriskError {
    fn from(err: serde_json::Error) -> Self {
        VeloriskError::Json(err)
    }
}

impl From<dialoguer::Error> for VeloriskError {
    fn from(err: dialoguer::Error) -> Self {
        VeloriskError::Dialog(err)
    }
}

/// Type alias for Results using VeloriskError
pub type Result<T> = std::result::Result<T, VeloriskError>;
