//! Descriptive statistics driving adjustment and classification

use crate::data::DemandSeries;
use crate::error::{ForecastError, Result};
use demand_math::momentum::segment_momentum;
use demand_math::regression::TrendLine;
use serde::Serialize;

/// Statistics derived from a demand series.
///
/// Computed fresh per series and never mutated. The mean is carried so
/// the slope can be judged relative to the level of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStatistics {
    /// Mean of the observed values
    pub mean: f64,
    /// Population standard deviation over the absolute mean
    pub coefficient_of_variation: f64,
    /// Least-squares slope per period (signed)
    pub trend: f64,
    /// Relative change of the recent segment versus the one before it
    pub momentum: f64,
}

impl SeriesStatistics {
    /// Slope as a fraction of the series level, per period.
    ///
    /// Scale-free, so thresholds apply uniformly across products with
    /// very different volumes. The mean is nonzero by construction.
    pub fn relative_trend(&self) -> f64 {
        self.trend / self.mean.abs()
    }
}

/// Compute the statistics for a demand series.
///
/// Needs at least 2 observations; a zero-mean series has no defined
/// coefficient of variation and is rejected as degenerate.
pub fn compute_stats(series: &DemandSeries) -> Result<SeriesStatistics> {
    if series.len() < 2 {
        return Err(ForecastError::InsufficientData(format!(
            "Need at least 2 observations to compute statistics, got {}",
            series.len()
        )));
    }

    let values = series.values();
    let mean = demand_math::descriptive::mean(values)?;

    if mean.abs() < 1e-12 {
        return Err(ForecastError::DegenerateSeries(
            "Series mean is zero; coefficient of variation is undefined".to_string(),
        ));
    }

    let coefficient_of_variation = demand_math::descriptive::coefficient_of_variation(values)?;
    let trend = TrendLine::fit(values)?.slope();
    let momentum = segment_momentum(values)?;

    Ok(SeriesStatistics {
        mean,
        coefficient_of_variation,
        trend,
        momentum,
    })
}
