//! The fixed scenario catalog
//!
//! Ten synthetic demand scenarios covering the strategic situations the
//! classifier distinguishes, plus two degenerate histories that exercise
//! the pipeline's failure paths. Generation is fully deterministic:
//! noisy series use a fixed per-scenario RNG seed and the rest are exact
//! shapes.

use crate::data::DemandSeries;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Months of history in every regular scenario
const HISTORY_MONTHS: usize = 12;

/// Palindromic on/off cycle over 12 months. Mirror symmetry keeps both
/// the least-squares slope and the segment means at exactly zero, so the
/// cycle adds spread without adding direction.
const CYCLE: [f64; 12] = [
    1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0,
];

/// One named demand scenario
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Short scenario identifier
    pub id: String,
    /// Product the demand history belongs to
    pub product: String,
    /// Growth context shown to study participants
    pub context: String,
    /// Monthly demand history
    pub series: DemandSeries,
}

impl Scenario {
    fn new(id: &str, product: &str, context: &str, values: Vec<f64>) -> Self {
        let series = DemandSeries::from_monthly(first_month(), values)
            .expect("static scenario data is well formed");

        Self {
            id: id.to_string(),
            product: product.to_string(),
            context: context.to_string(),
            series,
        }
    }
}

fn first_month() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid calendar date")
}

/// Build the full catalog of 10 scenarios.
///
/// Two of them (S9, S10) are deliberately unforecastable and are
/// reported as failures by the runner rather than aborting the batch.
pub fn all_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "S1",
            "Premium Coffee Beans",
            "Subscription club growing roughly 5% month over month with stable variance",
            growth_series(100.0, 0.05, 1.5, 11),
        ),
        Scenario::new(
            "S2",
            "Festival Popcorn Packs",
            "Event-driven demand swinging between on and off months with no direction",
            cycle_series(100.0, 60.0),
        ),
        Scenario::new(
            "S3",
            "Clearance Fashion Lots",
            "Liquidation channel: shipments whipsaw while the program winds down",
            decaying_cycle_series(200.0, 0.93, 80.0),
        ),
        Scenario::new(
            "S4",
            "DVD Player Units",
            "Legacy electronics fading about 7% a month as streaming takes over",
            growth_series(200.0, -0.07, 2.0, 47),
        ),
        Scenario::new(
            "S5",
            "Contract Bottled Water",
            "Fixed-volume supply agreement, identical order every month",
            vec![50.0; HISTORY_MONTHS],
        ),
        Scenario::new(
            "S6",
            "Artisan Honey Jars",
            "Farm-shop staple inching upward as word of mouth spreads",
            drift_series(100.0, 0.3),
        ),
        Scenario::new(
            "S7",
            "Garden Tool Sets",
            "Weather-whipped category with a slow underlying upgrade cycle",
            drifting_cycle_series(100.0, 1.3, 35.0),
        ),
        Scenario::new(
            "S8",
            "Standard Printer Paper",
            "Office staple that climbed for years, now dented by digitization",
            vec![
                100.0, 104.0, 108.0, 112.0, 116.0, 120.0, 124.0, 128.0, 126.0, 120.0, 112.0,
                102.0,
            ],
        ),
        Scenario::new(
            "S9",
            "Launch Sample Kits",
            "Brand-new product with a single month of history",
            vec![120.0],
        ),
        Scenario::new(
            "S10",
            "Net Channel Returns",
            "Returns netted against replacements; monthly balance centers on zero",
            vec![
                40.0, -40.0, 35.0, -35.0, 30.0, -30.0, 30.0, -30.0, 35.0, -35.0, 40.0, -40.0,
            ],
        ),
    ]
}

/// Compound growth (or decay, for a negative rate) with seeded Gaussian
/// noise on top.
fn growth_series(start: f64, monthly_rate: f64, noise_sd: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, noise_sd).expect("valid noise distribution");

    (0..HISTORY_MONTHS)
        .map(|t| start * (1.0 + monthly_rate).powi(t as i32) + noise.sample(&mut rng))
        .collect()
}

/// Flat level with the palindromic on/off cycle
fn cycle_series(level: f64, amplitude: f64) -> Vec<f64> {
    CYCLE.iter().map(|sign| level + sign * amplitude).collect()
}

/// Linear drift, no noise
fn drift_series(level: f64, slope: f64) -> Vec<f64> {
    (0..HISTORY_MONTHS)
        .map(|t| level + slope * t as f64)
        .collect()
}

/// Linear drift with the palindromic cycle on top
fn drifting_cycle_series(level: f64, slope: f64, amplitude: f64) -> Vec<f64> {
    CYCLE
        .iter()
        .enumerate()
        .map(|(t, sign)| level + slope * t as f64 + sign * amplitude)
        .collect()
}

/// Compound decay with an alternating shipment swing on top
fn decaying_cycle_series(start: f64, monthly_factor: f64, amplitude: f64) -> Vec<f64> {
    (0..HISTORY_MONTHS)
        .map(|t| {
            let swing = if t % 2 == 0 { amplitude } else { -amplitude };
            start * monthly_factor.powi(t as i32) + swing
        })
        .collect()
}
