/// Error types for loading and validating the dashboard dataset
use thiserror::Error;

/// Main error type for dataset operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to read the dataset file
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The header row has no country key column
    #[error("Dataset has no '{0}' column")]
    MissingCountryColumn(&'static str),

    /// A row has an empty country name
    #[error("Row {0} has an empty country name")]
    EmptyCountry(usize),

    /// Two rows share the same country name
    #[error("Country appears more than once: {0}")]
    DuplicateCountry(String),

    /// Columns the indicator vocabulary needs are absent from the header
    #[error("Dataset is missing indicator columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// An indicator column holds a value that is not a number
    #[error("Non-numeric value {value:?} in column '{column}' for {country}")]
    NonNumeric {
        country: String,
        column: String,
        value: String,
    },

    /// A name that is not part of the indicator vocabulary
    #[error("Unknown indicator: {0}")]
    UnknownIndicator(String),
}

/// Type alias for Results using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
