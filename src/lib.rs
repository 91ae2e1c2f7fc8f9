//! # Gambit XAI
//!
//! Umbrella crate for the chess-motif explainable forecasting workspace.
//! The actual functionality lives in the member crates:
//!
//! - [`demand_math`] holds the numeric primitives (descriptive
//!   statistics, trend fitting, momentum, differencing, linear solving).
//! - [`gambit_forecast`] holds the pipeline: series handling, ARIMA
//!   forecasting with automatic order selection, the adjustment rule
//!   engine, the motif classifier, explanation generation, the scenario
//!   catalog and the batch runner.
//!
//! ## Example
//!
//! ```
//! use gambit_xai::gambit_forecast::adjustment::AdjustmentConfig;
//! use gambit_xai::gambit_forecast::{all_scenarios, run_all_scenarios};
//!
//! let summary = run_all_scenarios(&all_scenarios(), &AdjustmentConfig::default());
//! assert_eq!(summary.reports.len() + summary.failures.len(), 10);
//! ```

pub use demand_math;
pub use gambit_forecast;
