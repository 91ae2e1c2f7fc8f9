//! Forecasting models for demand series

use crate::data::DemandSeries;
use crate::error::{ForecastError, Result};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt::Debug;

pub mod arima;
pub mod naive;

use arima::ArimaModel;
use naive::NaiveModel;

/// Fixed forecast horizon of the pipeline, in periods
pub const FORECAST_HORIZON: usize = 6;

/// Minimum series length for automatic order selection. Shorter series
/// go straight to the naive fallback and the result is flagged degraded.
pub const MIN_AUTO_FIT_LEN: usize = 8;

/// A raw (unadjusted) forecast produced by a trained model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawForecast {
    /// Forecasted values, one per horizon period
    pub(crate) values: Vec<f64>,
    /// Number of periods forecasted
    horizon: usize,
    /// Whether the fallback model produced this forecast
    pub(crate) is_degraded: bool,
    /// Name of the model that produced the forecast
    model_name: String,
    /// Residual standard deviation of the fit, for interval estimates
    residual_std: f64,
}

impl RawForecast {
    /// Create a new raw forecast
    pub fn new(
        values: Vec<f64>,
        horizon: usize,
        model_name: String,
        residual_std: f64,
    ) -> Result<Self> {
        if values.len() != horizon {
            return Err(ForecastError::ValidationError(format!(
                "Values length ({}) doesn't match horizon ({})",
                values.len(),
                horizon
            )));
        }

        Ok(Self {
            values,
            horizon,
            is_degraded: false,
            model_name,
            residual_std,
        })
    }

    /// Get the forecasted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of periods forecasted
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Whether the forecast came from the fallback model
    pub fn is_degraded(&self) -> bool {
        self.is_degraded
    }

    /// Name of the model that produced the forecast
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Normal-theory confidence intervals around the forecast.
    ///
    /// The margin widens with the square root of the step index, the
    /// usual random-walk growth of forecast uncertainty.
    pub fn confidence_intervals(&self, confidence_level: f64) -> Result<Vec<(f64, f64)>> {
        if confidence_level <= 0.0 || confidence_level >= 1.0 {
            return Err(ForecastError::ValidationError(
                "Confidence level must be between 0 and 1".to_string(),
            ));
        }

        let standard_normal = Normal::new(0.0, 1.0)
            .map_err(|e| ForecastError::ValidationError(e.to_string()))?;
        let z = standard_normal.inverse_cdf(0.5 + confidence_level / 2.0);

        let intervals = self
            .values
            .iter()
            .enumerate()
            .map(|(step, &value)| {
                let margin = z * self.residual_std * ((step + 1) as f64).sqrt();
                (value - margin, value + margin)
            })
            .collect();

        Ok(intervals)
    }

    /// Serialize the forecast to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ForecastError::DataError(format!("Serialization failed: {}", e)))
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Generate a forecast for future periods
    fn forecast(&self, horizon: usize) -> Result<RawForecast>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on a demand series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on a demand series
    fn train(&self, series: &DemandSeries) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

/// Produce the raw forecast for a series over the fixed horizon.
///
/// Automatic order selection runs first; when it cannot produce a model
/// the naive last-value forecast stands in and the result is flagged
/// degraded. Fails with `Convergence` only when even the fallback is
/// impossible (fewer than 2 observations).
pub fn forecast_demand(series: &DemandSeries) -> Result<RawForecast> {
    if series.len() < 2 {
        return Err(ForecastError::Convergence(format!(
            "Series of length {} supports no forecast at all",
            series.len()
        )));
    }

    if series.len() >= MIN_AUTO_FIT_LEN {
        match ArimaModel::auto_fit(series) {
            Ok(trained) => return trained.forecast(FORECAST_HORIZON),
            Err(err) => {
                log::warn!(
                    "automatic order selection failed ({}); using naive fallback",
                    err
                );
            }
        }
    } else {
        log::debug!(
            "series too short for order selection ({} < {}); using naive fallback",
            series.len(),
            MIN_AUTO_FIT_LEN
        );
    }

    let trained = NaiveModel::new().train(series)?;
    let mut raw = trained.forecast(FORECAST_HORIZON)?;
    raw.is_degraded = true;
    Ok(raw)
}
