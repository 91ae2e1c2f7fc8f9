//! Chess-motif classification of forecast adjustments
//!
//! Maps a (statistics, adjustment) pair onto exactly one of eight fixed
//! strategic motifs. The decision procedure is an explicit ordered list
//! of predicates evaluated top to bottom; the first hit wins and
//! `Position` is the guaranteed catch-all, so classification is total.

use crate::adjustment::{AdjustmentConfig, AdjustmentRule, ForecastResult};
use crate::stats::SeriesStatistics;
use serde::Serialize;
use std::fmt;

/// Coefficient of variation from which volatility counts as moderate,
/// the band where an adjustment serves safety and trend capture at once
pub const VOLATILITY_MODERATE: f64 = 0.25;

/// Relative trend below which the series counts as trendless
pub const TREND_NOISE: f64 = 0.001;

/// The eight strategic motifs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MotifLabel {
    /// Seizing the initiative while ahead of the opponent's plan
    Tempo,
    /// One move serving two aims at once
    Fork,
    /// Preventing a threat before it materializes
    Prophylaxis,
    /// Every committal move worsens the position
    Zugzwang,
    /// Building the position without forcing the issue
    Development,
    /// Accepting a cost now to avoid a larger one later
    Exchange,
    /// A decision reducible to plain counting
    Material,
    /// Flexible play while the structure is unclear
    Position,
}

impl MotifLabel {
    /// All motifs, in classification priority order
    pub const ALL: [MotifLabel; 8] = [
        MotifLabel::Zugzwang,
        MotifLabel::Prophylaxis,
        MotifLabel::Tempo,
        MotifLabel::Exchange,
        MotifLabel::Fork,
        MotifLabel::Development,
        MotifLabel::Material,
        MotifLabel::Position,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            MotifLabel::Tempo => "Tempo",
            MotifLabel::Fork => "Fork",
            MotifLabel::Prophylaxis => "Prophylaxis",
            MotifLabel::Zugzwang => "Zugzwang",
            MotifLabel::Development => "Development",
            MotifLabel::Exchange => "Exchange",
            MotifLabel::Material => "Material",
            MotifLabel::Position => "Position",
        }
    }

    /// The motif's fixed chess analogy phrase, used verbatim in the
    /// chess-framed explanation
    pub fn analogy(&self) -> &'static str {
        match self {
            MotifLabel::Tempo => {
                "gaining tempo by advancing pawns before the opponent can regroup"
            }
            MotifLabel::Fork => "a knight fork, one move serving two aims at once",
            MotifLabel::Prophylaxis => {
                "prophylaxis, quietly covering a weakness before it can be exploited"
            }
            MotifLabel::Zugzwang => {
                "zugzwang, where every committal move would worsen the position"
            }
            MotifLabel::Development => {
                "developing pieces, improving the position without forcing matters"
            }
            MotifLabel::Exchange => {
                "an exchange sacrifice, conceding material now to avoid a worse position later"
            }
            MotifLabel::Material => "counting material, a trade judged purely on value",
            MotifLabel::Position => {
                "playing for position, keeping the pieces flexible until the structure clarifies"
            }
        }
    }
}

impl fmt::Display for MotifLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Classify a forecast adjustment into exactly one motif.
///
/// Predicates overlap; the ordering resolves every overlap, so callers
/// must not reorder the list.
pub fn classify_motif(
    stats: &SeriesStatistics,
    result: &ForecastResult,
    config: &AdjustmentConfig,
) -> MotifLabel {
    let cv = stats.coefficient_of_variation;
    let rel_trend = stats.relative_trend();
    let momentum = stats.momentum;
    let pct = result.adjustment_pct();
    let rule = result.rule();

    let directionless =
        rel_trend.abs() <= config.trend_strong && momentum.abs() <= config.momentum_strong;

    let checks = [
        // No good option: volatility high but nothing points anywhere
        (directionless && cv > config.volatility_high, MotifLabel::Zugzwang),
        // Downward buffer driven purely by volatility
        (rule == AdjustmentRule::HighVolatility, MotifLabel::Prophylaxis),
        // Raised ahead of a confirmed upward trend
        (rule == AdjustmentRule::TrendSurge, MotifLabel::Tempo),
        // Lowered into a confirmed downward trend
        (rule == AdjustmentRule::TrendCollapse, MotifLabel::Exchange),
        // One adjustment covering safety and trend capture at once
        (
            pct != 0.0
                && cv >= VOLATILITY_MODERATE
                && rel_trend.abs() > config.trend_mild
                && pct.signum() == rel_trend.signum(),
            MotifLabel::Fork,
        ),
        // A trend exists but no action is taken yet
        (pct == 0.0 && rel_trend.abs() > TREND_NOISE, MotifLabel::Development),
        // The adjustment itself dominates; volatility plays no role
        (pct != 0.0 && cv < VOLATILITY_MODERATE, MotifLabel::Material),
    ];

    checks
        .iter()
        .find(|(hit, _)| *hit)
        .map(|(_, label)| *label)
        .unwrap_or(MotifLabel::Position)
}
