//! Error types for the gambit_forecast crate

use demand_math::MathError;
use thiserror::Error;

/// Custom error types for the gambit_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Series too short for the requested calculation
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Zero-mean series, coefficient of variation undefined
    #[error("Degenerate series: {0}")]
    DegenerateSeries(String),

    /// No forecast producible, even via the fallback model
    #[error("Forecast failed to converge: {0}")]
    Convergence(String),

    /// Error from invalid parameters
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error related to data content or shape
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData(msg) => ForecastError::InsufficientData(msg),
            MathError::InvalidInput(msg) => ForecastError::ValidationError(msg),
            MathError::CalculationError(msg) => ForecastError::DataError(msg),
        }
    }
}
