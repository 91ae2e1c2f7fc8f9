//! Naive last-value forecast, the fallback when order selection fails

use crate::data::DemandSeries;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, RawForecast, TrainedForecastModel};

/// Naive forecast model: repeats the last observed value
#[derive(Debug, Clone)]
pub struct NaiveModel {
    /// Name of the model
    name: String,
}

impl NaiveModel {
    /// Create a new naive model
    pub fn new() -> Self {
        Self {
            name: "Naive(last value)".to_string(),
        }
    }
}

impl Default for NaiveModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Trained naive model
#[derive(Debug, Clone)]
pub struct TrainedNaiveModel {
    /// Name of the model
    name: String,
    /// Last observed value
    last_value: f64,
    /// Standard deviation of one-step changes, for interval estimates
    residual_std: f64,
}

impl ForecastModel for NaiveModel {
    type Trained = TrainedNaiveModel;

    fn train(&self, series: &DemandSeries) -> Result<TrainedNaiveModel> {
        let values = series.values();
        let last_value = *values.last().ok_or_else(|| {
            ForecastError::InsufficientData("Cannot train on an empty series".to_string())
        })?;

        let residual_std = if values.len() >= 2 {
            let deltas: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
            demand_math::descriptive::population_std_dev(&deltas)?
        } else {
            0.0
        };

        Ok(TrainedNaiveModel {
            name: self.name.clone(),
            last_value,
            residual_std,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedNaiveModel {
    fn forecast(&self, horizon: usize) -> Result<RawForecast> {
        RawForecast::new(
            vec![self.last_value; horizon],
            horizon,
            self.name.clone(),
            self.residual_std,
        )
    }

    fn name(&self) -> &str {
        &self.name
    }
}
