//! Descriptive statistics over raw demand values

use crate::{MathError, Result};

/// Arithmetic mean of a slice of values
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot compute the mean of an empty slice".to_string(),
        ));
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation of a slice of values
pub fn population_std_dev(values: &[f64]) -> Result<f64> {
    let mean = mean(values)?;

    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;

    Ok(variance.sqrt())
}

/// Coefficient of variation: population standard deviation over the
/// absolute mean, a scale-free dispersion measure.
///
/// Fails with `CalculationError` when the mean is zero, since the ratio
/// is undefined there.
pub fn coefficient_of_variation(values: &[f64]) -> Result<f64> {
    let mean = mean(values)?;

    if mean.abs() < f64::EPSILON {
        return Err(MathError::CalculationError(
            "Coefficient of variation is undefined for a zero-mean series".to_string(),
        ));
    }

    Ok(population_std_dev(values)? / mean.abs())
}
