//! Demand series handling and loading

use crate::error::{ForecastError, Result};
use chrono::{Months, NaiveDate};
use std::path::Path;

/// An immutable demand series: one observation per monthly period.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandSeries {
    periods: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl DemandSeries {
    /// Create a series from explicit period labels and values.
    pub fn new(periods: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::DataError(
                "Demand series cannot be empty".to_string(),
            ));
        }
        if periods.len() != values.len() {
            return Err(ForecastError::DataError(format!(
                "Period labels ({}) do not match values ({})",
                periods.len(),
                values.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::DataError(
                "Demand values must be finite".to_string(),
            ));
        }

        Ok(Self { periods, values })
    }

    /// Create a series from a start month, synthesizing consecutive
    /// monthly period labels.
    pub fn from_monthly(start: NaiveDate, values: Vec<f64>) -> Result<Self> {
        let mut periods = Vec::with_capacity(values.len());
        let mut current = start;
        for _ in 0..values.len() {
            periods.push(current);
            current = current
                .checked_add_months(Months::new(1))
                .ok_or_else(|| ForecastError::DataError("Period overflow".to_string()))?;
        }

        Self::new(periods, values)
    }

    /// Observed demand values in period order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Period labels in order
    pub fn periods(&self) -> &[NaiveDate] {
        &self.periods
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mean of the demand values
    pub fn mean(&self) -> Result<f64> {
        Ok(demand_math::descriptive::mean(&self.values)?)
    }

    /// Population standard deviation of the demand values
    pub fn std_dev(&self) -> Result<f64> {
        Ok(demand_math::descriptive::population_std_dev(&self.values)?)
    }

    /// Monthly period labels continuing past the end of the series
    pub fn future_periods(&self, horizon: usize) -> Result<Vec<NaiveDate>> {
        let last = *self.periods.last().ok_or_else(|| {
            ForecastError::DataError("Demand series has no period labels".to_string())
        })?;

        let mut periods = Vec::with_capacity(horizon);
        let mut current = last;
        for _ in 0..horizon {
            current = current
                .checked_add_months(Months::new(1))
                .ok_or_else(|| ForecastError::DataError("Period overflow".to_string()))?;
            periods.push(current);
        }

        Ok(periods)
    }
}

/// Loader for demand series stored as CSV
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a demand series from a CSV file with `period` and `demand`
    /// columns. Periods are ISO dates (`YYYY-MM-DD`).
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<DemandSeries> {
        let mut reader = csv::Reader::from_path(path)?;

        let headers = reader.headers()?.clone();
        let period_idx = Self::find_column(&headers, &["period", "month", "date"])?;
        let demand_idx = Self::find_column(&headers, &["demand", "quantity", "value"])?;

        let mut periods = Vec::new();
        let mut values = Vec::new();

        for record in reader.records() {
            let record = record?;

            let period_field = record.get(period_idx).ok_or_else(|| {
                ForecastError::DataError("Row is missing the period column".to_string())
            })?;
            let demand_field = record.get(demand_idx).ok_or_else(|| {
                ForecastError::DataError("Row is missing the demand column".to_string())
            })?;

            let period = period_field.trim().parse::<NaiveDate>().map_err(|e| {
                ForecastError::DataError(format!("Invalid period '{}': {}", period_field, e))
            })?;
            let value = demand_field.trim().parse::<f64>().map_err(|e| {
                ForecastError::DataError(format!("Invalid demand '{}': {}", demand_field, e))
            })?;

            periods.push(period);
            values.push(value);
        }

        DemandSeries::new(periods, values)
    }

    fn find_column(headers: &csv::StringRecord, candidates: &[&str]) -> Result<usize> {
        for (idx, name) in headers.iter().enumerate() {
            let lower = name.to_lowercase();
            if candidates.iter().any(|c| lower.contains(c)) {
                return Ok(idx);
            }
        }

        Err(ForecastError::DataError(format!(
            "No column matching any of {:?} found in header",
            candidates
        )))
    }
}
