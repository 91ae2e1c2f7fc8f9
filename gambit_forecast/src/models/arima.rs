//! ARIMA models with automatic order selection
//!
//! Estimation is the two-stage Hannan–Rissanen procedure: a long
//! autoregression supplies residual proxies, then the AR and MA
//! coefficients are estimated together by least squares. Order selection
//! searches the bounded (p, d, q) grid and keeps the lowest-AIC fit.

use crate::data::DemandSeries;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, RawForecast, TrainedForecastModel};
use demand_math::differencing::{difference, integrate};
use demand_math::linalg::least_squares;

/// Largest order considered for each of p, d and q
pub const MAX_ORDER: usize = 3;

/// Floor applied to the residual variance inside the AIC logarithm, so a
/// perfect fit (zero variance) still yields a finite, comparable score.
const AIC_VARIANCE_FLOOR: f64 = 1e-12;

/// ARIMA model specification (AutoRegressive Integrated Moving Average)
#[derive(Debug, Clone)]
pub struct ArimaModel {
    /// Name of the model
    name: String,
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
}

/// Trained ARIMA model
#[derive(Debug, Clone)]
pub struct TrainedArimaModel {
    /// Name of the model
    name: String,
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
    /// Fitted AR coefficients
    ar_coefficients: Vec<f64>,
    /// Fitted MA coefficients
    ma_coefficients: Vec<f64>,
    /// Original (undifferenced) series
    history: Vec<f64>,
    /// Mean of the differenced series
    z_mean: f64,
    /// Centered differenced series
    centered: Vec<f64>,
    /// Residuals from fitting, aligned with `centered`
    residuals: Vec<f64>,
    /// Residual standard deviation
    sigma: f64,
    /// Akaike information criterion of the fit
    aic: f64,
}

impl ArimaModel {
    /// Create a new ARIMA model with the given orders (each at most
    /// [`MAX_ORDER`]).
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if p > MAX_ORDER || d > MAX_ORDER || q > MAX_ORDER {
            return Err(ForecastError::ValidationError(format!(
                "ARIMA orders are limited to {} each, got ({},{},{})",
                MAX_ORDER, p, d, q
            )));
        }

        Ok(Self {
            name: format!("ARIMA({},{},{})", p, d, q),
            p,
            d,
            q,
        })
    }

    /// Search the bounded order grid and return the fit with the lowest
    /// AIC. Grid order is (d, p, q) ascending and ties keep the earlier
    /// candidate, so selection is deterministic.
    pub fn auto_fit(series: &DemandSeries) -> Result<TrainedArimaModel> {
        let mut best: Option<TrainedArimaModel> = None;

        for d in 0..=MAX_ORDER {
            for p in 0..=MAX_ORDER {
                for q in 0..=MAX_ORDER {
                    let model = ArimaModel::new(p, d, q)?;
                    match model.train(series) {
                        Ok(trained) => {
                            if best.as_ref().map_or(true, |b| trained.aic < b.aic) {
                                best = Some(trained);
                            }
                        }
                        Err(err) => {
                            log::trace!("ARIMA({},{},{}) rejected: {}", p, d, q, err);
                        }
                    }
                }
            }
        }

        best.ok_or_else(|| {
            ForecastError::Convergence("No candidate order produced a usable fit".to_string())
        })
    }
}

impl ForecastModel for ArimaModel {
    type Trained = TrainedArimaModel;

    fn train(&self, series: &DemandSeries) -> Result<TrainedArimaModel> {
        let values = series.values();
        let z = difference(values, self.d)?;
        let m = z.len();

        if m < self.p + self.q + 2 {
            return Err(ForecastError::InsufficientData(format!(
                "Insufficient data for ARIMA({},{},{}): {} differenced observations",
                self.p, self.d, self.q, m
            )));
        }

        let z_mean = z.iter().sum::<f64>() / m as f64;
        let centered: Vec<f64> = z.iter().map(|v| v - z_mean).collect();

        let (ar_coefficients, ma_coefficients, residuals, sigma2) =
            estimate_coefficients(&centered, self.p, self.q)?;

        if ar_coefficients
            .iter()
            .chain(ma_coefficients.iter())
            .any(|c| !c.is_finite())
            || !sigma2.is_finite()
        {
            return Err(ForecastError::Convergence(format!(
                "ARIMA({},{},{}) produced non-finite estimates",
                self.p, self.d, self.q
            )));
        }

        let effective_start = self.p.max(self.q);
        let n_eff = (m - effective_start) as f64;
        let aic = n_eff * sigma2.max(AIC_VARIANCE_FLOOR).ln()
            + 2.0 * (self.p + self.q + 1) as f64;

        Ok(TrainedArimaModel {
            name: self.name.clone(),
            p: self.p,
            d: self.d,
            q: self.q,
            ar_coefficients,
            ma_coefficients,
            history: values.to_vec(),
            z_mean,
            centered,
            residuals,
            sigma: sigma2.max(0.0).sqrt(),
            aic,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedArimaModel {
    /// The fitted (p, d, q) orders
    pub fn orders(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Akaike information criterion of the fit
    pub fn aic(&self) -> f64 {
        self.aic
    }
}

impl TrainedForecastModel for TrainedArimaModel {
    fn forecast(&self, horizon: usize) -> Result<RawForecast> {
        let mut centered = self.centered.clone();
        let mut residuals = self.residuals.clone();
        let mut z_forecast = Vec::with_capacity(horizon);

        for _ in 0..horizon {
            let t = centered.len();
            let mut value = 0.0;

            for (i, phi) in self.ar_coefficients.iter().enumerate() {
                if t >= i + 1 {
                    value += phi * centered[t - 1 - i];
                }
            }
            for (j, theta) in self.ma_coefficients.iter().enumerate() {
                if t >= j + 1 {
                    value += theta * residuals[t - 1 - j];
                }
            }

            centered.push(value);
            // Future shocks are unknown and enter at their expectation
            residuals.push(0.0);
            z_forecast.push(value + self.z_mean);
        }

        let values = integrate(&self.history, &z_forecast, self.d)?;

        RawForecast::new(values, horizon, self.name.clone(), self.sigma)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Estimate AR and MA coefficients on a centered, differenced series.
///
/// Returns (ar, ma, residuals, residual variance). The residual vector
/// is aligned with the input; entries before the recursion warms up are
/// zero.
fn estimate_coefficients(
    centered: &[f64],
    p: usize,
    q: usize,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>, f64)> {
    let m = centered.len();

    if p == 0 && q == 0 {
        // White noise around the mean
        let residuals = centered.to_vec();
        let sigma2 = residuals.iter().map(|e| e * e).sum::<f64>() / m as f64;
        return Ok((Vec::new(), Vec::new(), residuals, sigma2));
    }

    let (proxy, start) = if q > 0 {
        let p_long = (p + q + 2).min(m / 2).max(1);
        let proxy = long_ar_residuals(centered, p_long)?;
        (proxy, p.max(p_long + q))
    } else {
        (Vec::new(), p)
    };

    if m <= start || m - start < p + q + 1 {
        return Err(ForecastError::Convergence(format!(
            "Too few rows to estimate {} coefficients",
            p + q
        )));
    }

    let mut rows = Vec::with_capacity(m - start);
    let mut targets = Vec::with_capacity(m - start);
    for t in start..m {
        let mut row = Vec::with_capacity(p + q);
        for i in 1..=p {
            row.push(centered[t - i]);
        }
        for j in 1..=q {
            row.push(proxy[t - j]);
        }
        rows.push(row);
        targets.push(centered[t]);
    }

    let coefficients = least_squares(&rows, &targets)
        .map_err(|e| ForecastError::Convergence(e.to_string()))?;
    let ar = coefficients[..p].to_vec();
    let ma = coefficients[p..].to_vec();

    // Residual recursion over the full centered series
    let mut residuals = vec![0.0; m];
    for t in p..m {
        let mut prediction = 0.0;
        for (i, phi) in ar.iter().enumerate() {
            prediction += phi * centered[t - 1 - i];
        }
        for (j, theta) in ma.iter().enumerate() {
            if t >= j + 1 {
                prediction += theta * residuals[t - 1 - j];
            }
        }
        residuals[t] = centered[t] - prediction;
    }

    let effective_start = p.max(q);
    let tail = &residuals[effective_start..];
    let sigma2 = tail.iter().map(|e| e * e).sum::<f64>() / tail.len() as f64;

    Ok((ar, ma, residuals, sigma2))
}

/// Residual proxies from a long autoregression, used as stand-ins for
/// the unobservable shocks in the second estimation stage.
fn long_ar_residuals(centered: &[f64], p_long: usize) -> Result<Vec<f64>> {
    let m = centered.len();
    if m <= p_long {
        return Err(ForecastError::Convergence(
            "Series too short for the long autoregression".to_string(),
        ));
    }

    let mut rows = Vec::with_capacity(m - p_long);
    let mut targets = Vec::with_capacity(m - p_long);
    for t in p_long..m {
        let row: Vec<f64> = (1..=p_long).map(|i| centered[t - i]).collect();
        rows.push(row);
        targets.push(centered[t]);
    }

    let phi = least_squares(&rows, &targets)
        .map_err(|e| ForecastError::Convergence(e.to_string()))?;

    let mut proxies = vec![0.0; m];
    for t in p_long..m {
        let prediction: f64 = phi
            .iter()
            .enumerate()
            .map(|(i, coef)| coef * centered[t - 1 - i])
            .sum();
        proxies[t] = centered[t] - prediction;
    }

    Ok(proxies)
}
