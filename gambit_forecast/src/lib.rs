//! # Gambit Forecast
//!
//! A Rust library for short-horizon demand forecasting with paired
//! explanations: every adjusted forecast carries a plain statistical
//! explanation and a chess-framed one keyed to a fixed taxonomy of
//! eight strategic motifs.
//!
//! ## Features
//!
//! - Demand series handling with monthly period labels and CSV loading
//! - Descriptive statistics (coefficient of variation, trend, momentum)
//! - ARIMA forecasting with automatic order selection and a naive
//!   fallback over a fixed 6-period horizon
//! - A bounded, ordered rule engine for forecast adjustments (±20%)
//! - Deterministic classification into eight chess motifs
//! - Template-based explanation generation
//! - A fixed 10-scenario catalog and a failure-isolating batch runner
//!
//! ## Quick Start
//!
//! ```rust
//! use gambit_forecast::adjustment::{recommend_adjustment, AdjustmentConfig};
//! use gambit_forecast::data::DemandSeries;
//! use gambit_forecast::explain::generate_explanations;
//! use gambit_forecast::models::forecast_demand;
//! use gambit_forecast::motif::classify_motif;
//! use gambit_forecast::stats::compute_stats;
//! use chrono::NaiveDate;
//!
//! # fn main() -> gambit_forecast::Result<()> {
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let series = DemandSeries::from_monthly(
//!     start,
//!     vec![100.0, 102.0, 105.0, 108.0, 112.0, 118.0, 123.0, 130.0],
//! )?;
//!
//! let config = AdjustmentConfig::default();
//! let stats = compute_stats(&series)?;
//! let raw = forecast_demand(&series)?;
//! let result = recommend_adjustment(&stats, raw, &config);
//! let motif = classify_motif(&stats, &result, &config);
//! let texts = generate_explanations(&result, motif, "Sample Product", "steady growth");
//!
//! assert_eq!(result.adjusted_forecast().len(), 6);
//! println!("{}", texts.chess_text);
//! # Ok(())
//! # }
//! ```

pub mod adjustment;
pub mod data;
pub mod error;
pub mod explain;
pub mod models;
pub mod motif;
pub mod runner;
pub mod scenarios;
pub mod stats;

// Re-export commonly used types
pub use crate::adjustment::{AdjustmentConfig, AdjustmentRule, ForecastResult};
pub use crate::data::{DataLoader, DemandSeries};
pub use crate::error::{ForecastError, Result};
pub use crate::explain::ExplanationPair;
pub use crate::models::{forecast_demand, RawForecast, FORECAST_HORIZON};
pub use crate::motif::MotifLabel;
pub use crate::runner::{run_all_scenarios, RunSummary, ScenarioFailure, ScenarioReport};
pub use crate::scenarios::{all_scenarios, Scenario};
pub use crate::stats::{compute_stats, SeriesStatistics};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
