//! Ordinary least-squares trend fitting
//!
//! Fits value against the 0-based observation index, which is how the
//! pipeline measures the per-period trend of a demand series.

use crate::{MathError, Result};
use serde::Serialize;

/// A fitted least-squares line over an indexed series
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendLine {
    slope: f64,
    intercept: f64,
    r_squared: f64,
}

impl TrendLine {
    /// Fit a line to the values by ordinary least squares, with the
    /// 0-based index as the independent variable.
    ///
    /// Requires at least 2 observations.
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(MathError::InsufficientData(
                "Need at least 2 observations for a trend line".to_string(),
            ));
        }

        let n = values.len() as f64;
        let x_mean = (values.len() - 1) as f64 / 2.0;
        let y_mean = values.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (i, &y) in values.iter().enumerate() {
            let x = i as f64;
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        if denominator.abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Cannot calculate slope: index values are too similar".to_string(),
            ));
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;

        // R-squared against the fitted line
        let mut ss_total = 0.0;
        let mut ss_residual = 0.0;
        for (i, &y) in values.iter().enumerate() {
            let y_pred = slope * i as f64 + intercept;
            ss_total += (y - y_mean).powi(2);
            ss_residual += (y - y_pred).powi(2);
        }

        let r_squared = if ss_total.abs() < 1e-10 {
            // Constant series: the flat line explains everything
            1.0
        } else {
            1.0 - ss_residual / ss_total
        };

        Ok(Self {
            slope,
            intercept,
            r_squared,
        })
    }

    /// Slope per index step (trend direction and strength)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Intercept at index 0
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficient of determination of the fit
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Value of the fitted line at the given index
    pub fn project(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }
}
