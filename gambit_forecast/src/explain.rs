//! Explanation generation: one statistical and one chess-framed text
//! per forecast adjustment

use crate::adjustment::{AdjustmentRule, ForecastResult};
use crate::motif::MotifLabel;
use serde::Serialize;

/// Sentence appended to both texts when the fallback forecast was used
const DEGRADED_NOTE: &str =
    " Note: automatic model selection did not converge and a fallback forecast \
     was used, so confidence in the projected values is reduced.";

/// The two parallel explanations for one forecast adjustment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationPair {
    /// Plain statistical explanation
    pub standard_text: String,
    /// Chess-framed explanation
    pub chess_text: String,
}

/// Render the explanation pair for a classified forecast.
///
/// Pure string formatting: the standard text is keyed by the fired rule,
/// the chess text by the motif's fixed analogy phrase.
pub fn generate_explanations(
    result: &ForecastResult,
    motif: MotifLabel,
    product: &str,
    context: &str,
) -> ExplanationPair {
    let pct = result.adjustment_pct();

    let mut standard_text = match result.rule() {
        AdjustmentRule::HighVolatility => format!(
            "Demand for {} is highly volatile, so the statistical forecast was \
             reduced by {:.1}% as a buffer against noise.",
            product,
            pct.abs()
        ),
        AdjustmentRule::TrendSurge => format!(
            "Demand for {} shows a strong upward trend confirmed by recent \
             momentum; the forecast was raised by {:.1}% to position supply \
             ahead of growth.",
            product,
            pct.abs()
        ),
        AdjustmentRule::TrendCollapse => format!(
            "Demand for {} shows a strong downward trend confirmed by recent \
             momentum; the forecast was lowered by {:.1}% to limit excess stock.",
            product,
            pct.abs()
        ),
        AdjustmentRule::Steady => format!(
            "Trend and volatility for {} are both mild, so the statistical \
             forecast is used as-is (0% adjustment).",
            product
        ),
        AdjustmentRule::RecencyBias => format!(
            "Trend and recent momentum for {} disagree; the forecast leans \
             {:+.1}% toward the more recent signal.",
            product, pct
        ),
    };

    let mut chess_text = format!(
        "{}: this plan for {} is like {}. A {:+.1}% adjustment fits the \
         position. ({})",
        motif.display_name(),
        product,
        motif.analogy(),
        pct,
        context
    );

    if result.is_degraded() {
        standard_text.push_str(DEGRADED_NOTE);
        chess_text.push_str(DEGRADED_NOTE);
    }

    ExplanationPair {
        standard_text,
        chess_text,
    }
}
