//! # Demand Math
//!
//! Mathematical calculations for demand series analysis.
//! This crate provides the numeric primitives the forecasting pipeline is
//! built from: descriptive statistics, least-squares trend fitting,
//! segment momentum, series differencing, and a small dense linear solver.

use thiserror::Error;

// Primitive modules
pub mod descriptive;
pub mod differencing;
pub mod linalg;
pub mod momentum;
pub mod regression;

/// Errors that can occur in demand-series calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for demand math operations
pub type Result<T> = std::result::Result<T, MathError>;
