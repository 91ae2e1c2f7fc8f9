//! Per-scenario pipeline execution and batch reporting

use crate::adjustment::{recommend_adjustment, AdjustmentConfig, ForecastResult};
use crate::error::{ForecastError, Result};
use crate::explain::{generate_explanations, ExplanationPair};
use crate::models::forecast_demand;
use crate::motif::{classify_motif, MotifLabel};
use crate::scenarios::Scenario;
use crate::stats::{compute_stats, SeriesStatistics};
use serde::Serialize;
use std::collections::BTreeMap;

/// Completed pipeline output for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Scenario identifier
    pub scenario_id: String,
    /// Product name
    pub product: String,
    /// Growth context string
    pub context: String,
    /// Statistics extracted from the demand history
    pub stats: SeriesStatistics,
    /// Raw and adjusted forecast with the fired rule
    pub forecast: ForecastResult,
    /// The classified motif
    pub motif: MotifLabel,
    /// The two parallel explanations
    pub explanations: ExplanationPair,
}

impl ScenarioReport {
    /// Serialize the report to JSON for downstream analysis tooling
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ForecastError::DataError(format!("Serialization failed: {}", e)))
    }
}

/// Failure record for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioFailure {
    /// Scenario identifier
    pub scenario_id: String,
    /// Product name
    pub product: String,
    /// Rendered error
    pub error: String,
}

/// Outcome of a batch run over the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Reports for scenarios that completed
    pub reports: Vec<ScenarioReport>,
    /// Failure records for scenarios that did not
    pub failures: Vec<ScenarioFailure>,
}

impl RunSummary {
    /// How many scenarios each motif was assigned to
    pub fn motif_distribution(&self) -> BTreeMap<MotifLabel, usize> {
        let mut counts = BTreeMap::new();
        for report in &self.reports {
            *counts.entry(report.motif).or_insert(0) += 1;
        }
        counts
    }
}

/// Run the full pipeline for a single scenario.
///
/// Statistics, forecast, adjustment, classification and explanation in
/// sequence; every stage produces a new record from its inputs.
pub fn process_scenario(scenario: &Scenario, config: &AdjustmentConfig) -> Result<ScenarioReport> {
    let stats = compute_stats(&scenario.series)?;
    let raw = forecast_demand(&scenario.series)?;

    if raw.is_degraded() {
        log::warn!(
            "scenario {} ({}): fallback forecast in use",
            scenario.id,
            scenario.product
        );
    }

    let forecast = recommend_adjustment(&stats, raw, config);
    let motif = classify_motif(&stats, &forecast, config);
    let explanations = generate_explanations(&forecast, motif, &scenario.product, &scenario.context);

    log::info!(
        "scenario {} ({}): {:+.1}% adjustment, motif {}",
        scenario.id,
        scenario.product,
        forecast.adjustment_pct(),
        motif
    );

    Ok(ScenarioReport {
        scenario_id: scenario.id.clone(),
        product: scenario.product.clone(),
        context: scenario.context.clone(),
        stats,
        forecast,
        motif,
        explanations,
    })
}

/// Run every scenario independently.
///
/// A scenario's failure is captured as a record and never aborts the
/// remaining scenarios.
pub fn run_all_scenarios(scenarios: &[Scenario], config: &AdjustmentConfig) -> RunSummary {
    let mut reports = Vec::new();
    let mut failures = Vec::new();

    for scenario in scenarios {
        match process_scenario(scenario, config) {
            Ok(report) => reports.push(report),
            Err(err) => {
                log::warn!(
                    "scenario {} ({}) failed: {}",
                    scenario.id,
                    scenario.product,
                    err
                );
                failures.push(ScenarioFailure {
                    scenario_id: scenario.id.clone(),
                    product: scenario.product.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    RunSummary { reports, failures }
}
