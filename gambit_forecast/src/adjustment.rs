//! Bounded rule-based forecast adjustment

use crate::models::RawForecast;
use crate::stats::SeriesStatistics;
use serde::Serialize;

/// Which adjustment rule fired for a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdjustmentRule {
    /// Volatility above the safety threshold; forecast buffered downward
    HighVolatility,
    /// Strong upward trend confirmed by momentum; forecast raised
    TrendSurge,
    /// Strong downward trend confirmed by momentum; forecast lowered
    TrendCollapse,
    /// Mild trend; forecast left untouched
    Steady,
    /// Trend and momentum disagree or only a weak signal remains; a
    /// small lean toward the more recent signal
    RecencyBias,
}

impl AdjustmentRule {
    /// The statistic that dominated the decision, for explanation text
    pub fn driver(&self) -> &'static str {
        match self {
            AdjustmentRule::HighVolatility => "volatility",
            AdjustmentRule::TrendSurge | AdjustmentRule::TrendCollapse => "trend",
            AdjustmentRule::Steady => "stability",
            AdjustmentRule::RecencyBias => "momentum",
        }
    }
}

/// Tunable thresholds and caps of the adjustment rules.
///
/// Trend thresholds apply to the slope divided by the series mean
/// (fractional change per period), so they carry across products with
/// very different volumes. The defaults are the reference values used
/// throughout the scenario catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustmentConfig {
    /// Coefficient of variation above which demand counts as volatile
    pub volatility_high: f64,
    /// Relative trend at or below which the trend counts as mild
    pub trend_mild: f64,
    /// Relative trend beyond which the trend counts as strong
    pub trend_strong: f64,
    /// Momentum magnitude required to confirm a strong trend
    pub momentum_strong: f64,
    /// Momentum magnitude below which momentum counts as noise
    pub momentum_noise: f64,
    /// Largest downward buffer the volatility rule may apply (percent)
    pub volatility_cut_max: f64,
    /// Largest swing the trend rules may apply (percent)
    pub trend_swing_max: f64,
    /// Gain from momentum to percent for the recency rule
    pub recency_gain: f64,
    /// Cap on the recency rule's adjustment (percent)
    pub recency_cap: f64,
    /// Hard clamp on any adjustment (percent, symmetric)
    pub max_adjustment_pct: f64,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            volatility_high: 0.5,
            trend_mild: 0.005,
            trend_strong: 0.02,
            momentum_strong: 0.02,
            momentum_noise: 0.005,
            volatility_cut_max: 10.0,
            trend_swing_max: 20.0,
            recency_gain: 50.0,
            recency_cap: 5.0,
            max_adjustment_pct: 20.0,
        }
    }
}

/// A raw forecast together with its rule-based adjustment.
///
/// The raw values are kept unchanged next to the adjusted ones, so both
/// remain inspectable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    raw: RawForecast,
    adjusted: Vec<f64>,
    adjustment_pct: f64,
    rule: AdjustmentRule,
}

impl ForecastResult {
    /// The unadjusted model forecast
    pub fn raw_forecast(&self) -> &[f64] {
        self.raw.values()
    }

    /// The adjusted forecast
    pub fn adjusted_forecast(&self) -> &[f64] {
        &self.adjusted
    }

    /// The applied adjustment in percent, within the configured clamp
    pub fn adjustment_pct(&self) -> f64 {
        self.adjustment_pct
    }

    /// The rule that produced the adjustment
    pub fn rule(&self) -> AdjustmentRule {
        self.rule
    }

    /// Whether the underlying forecast came from the fallback model
    pub fn is_degraded(&self) -> bool {
        self.raw.is_degraded()
    }

    /// The raw forecast record, including model name and intervals
    pub fn raw(&self) -> &RawForecast {
        &self.raw
    }
}

/// Evaluate the adjustment rules on a series' statistics.
///
/// The rules are ordered and the first applicable one wins:
/// 1. high volatility buffers the forecast downward,
/// 2. a strong upward trend confirmed by momentum raises it,
/// 3. a strong downward trend confirmed by momentum lowers it,
/// 4. a mild trend leaves it untouched,
/// 5. anything else leans toward the recent momentum, capped small.
/// The returned percentage is always within the configured clamp.
pub fn evaluate_rules(stats: &SeriesStatistics, config: &AdjustmentConfig) -> (AdjustmentRule, f64) {
    let cv = stats.coefficient_of_variation;
    let rel_trend = stats.relative_trend();
    let momentum = stats.momentum;

    let (rule, pct) = if cv > config.volatility_high {
        let severity = (cv - config.volatility_high) / config.volatility_high;
        let cut = (severity * config.volatility_cut_max).min(config.volatility_cut_max);
        (AdjustmentRule::HighVolatility, -cut)
    } else if rel_trend > config.trend_strong && momentum > config.momentum_strong {
        let boost =
            (rel_trend / config.trend_strong * config.trend_swing_max / 2.0).min(config.trend_swing_max);
        (AdjustmentRule::TrendSurge, boost)
    } else if rel_trend < -config.trend_strong && momentum < -config.momentum_strong {
        let cut =
            (rel_trend / config.trend_strong * config.trend_swing_max / 2.0).max(-config.trend_swing_max);
        (AdjustmentRule::TrendCollapse, cut)
    } else if rel_trend.abs() <= config.trend_mild {
        (AdjustmentRule::Steady, 0.0)
    } else {
        let lean = if momentum.abs() <= config.momentum_noise {
            0.0
        } else {
            (momentum * config.recency_gain).clamp(-config.recency_cap, config.recency_cap)
        };
        (AdjustmentRule::RecencyBias, lean)
    };

    (
        rule,
        pct.clamp(-config.max_adjustment_pct, config.max_adjustment_pct),
    )
}

/// Apply the adjustment rules to a raw forecast.
///
/// The adjusted values are derived elementwise and the raw forecast is
/// stored untouched alongside them.
pub fn recommend_adjustment(
    stats: &SeriesStatistics,
    raw: RawForecast,
    config: &AdjustmentConfig,
) -> ForecastResult {
    let (rule, adjustment_pct) = evaluate_rules(stats, config);

    let adjusted = raw
        .values()
        .iter()
        .map(|value| value * (1.0 + adjustment_pct / 100.0))
        .collect();

    ForecastResult {
        raw,
        adjusted,
        adjustment_pct,
        rule,
    }
}
