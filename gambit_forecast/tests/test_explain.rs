use gambit_forecast::adjustment::{recommend_adjustment, AdjustmentConfig, ForecastResult};
use gambit_forecast::explain::generate_explanations;
use gambit_forecast::models::RawForecast;
use gambit_forecast::motif::MotifLabel;
use gambit_forecast::stats::SeriesStatistics;

fn stats(cv: f64, relative_trend: f64, momentum: f64) -> SeriesStatistics {
    let mean = 100.0;
    SeriesStatistics {
        mean,
        coefficient_of_variation: cv,
        trend: relative_trend * mean,
        momentum,
    }
}

// A short series forces the fallback model, which is the only way a
// forecast gets flagged degraded
fn degraded_raw() -> RawForecast {
    use chrono::NaiveDate;
    use gambit_forecast::data::DemandSeries;
    use gambit_forecast::models::forecast_demand;

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let series =
        DemandSeries::from_monthly(start, vec![100.0, 101.0, 100.5, 101.5, 100.0]).unwrap();
    forecast_demand(&series).unwrap()
}

fn adjusted(stats: &SeriesStatistics, degraded: bool) -> ForecastResult {
    let raw = if degraded {
        degraded_raw()
    } else {
        RawForecast::new(vec![100.0; 6], 6, "Test".to_string(), 1.0).unwrap()
    };
    recommend_adjustment(stats, raw, &AdjustmentConfig::default())
}

#[test]
fn test_surge_explanation_reports_trend_driver() {
    let stats = stats(0.1, 0.05, 0.2);
    let result = adjusted(&stats, false);
    let texts = generate_explanations(&result, MotifLabel::Tempo, "Coffee Beans", "5% growth");

    assert!(texts.standard_text.contains("Coffee Beans"));
    assert!(texts.standard_text.contains("upward trend"));
    assert!(texts.standard_text.contains("raised"));
    assert!(!texts.standard_text.contains("fallback"));
}

#[test]
fn test_volatility_explanation_reports_buffer() {
    let stats = stats(0.8, 0.0, -0.1);
    let result = adjusted(&stats, false);
    let texts = generate_explanations(&result, MotifLabel::Prophylaxis, "Popcorn", "event spikes");

    assert!(texts.standard_text.contains("volatile"));
    assert!(texts.standard_text.contains("buffer"));
}

#[test]
fn test_chess_text_carries_motif_analogy_and_context() {
    let stats = stats(0.1, 0.05, 0.2);
    let result = adjusted(&stats, false);
    let texts = generate_explanations(&result, MotifLabel::Tempo, "Coffee Beans", "5% growth");

    assert!(texts.chess_text.contains("Tempo"));
    assert!(texts.chess_text.contains(MotifLabel::Tempo.analogy()));
    assert!(texts.chess_text.contains("Coffee Beans"));
    assert!(texts.chess_text.contains("5% growth"));
}

#[test]
fn test_steady_explanation_reports_no_adjustment() {
    let stats = stats(0.05, 0.0, 0.0);
    let result = adjusted(&stats, false);
    let texts = generate_explanations(&result, MotifLabel::Position, "Bottled Water", "contract");

    assert!(texts.standard_text.contains("0%"));
}

#[test]
fn test_degraded_forecast_notes_reduced_confidence() {
    let stats = stats(0.05, 0.0, 0.0);
    let result = adjusted(&stats, true);
    assert!(result.is_degraded());

    let texts = generate_explanations(&result, MotifLabel::Position, "Sample Kits", "new launch");

    assert!(texts.standard_text.contains("confidence"));
    assert!(texts.chess_text.contains("fallback"));
}

#[test]
fn test_generation_is_pure_formatting() {
    let stats = stats(0.1, 0.05, 0.2);
    let result = adjusted(&stats, false);

    let first = generate_explanations(&result, MotifLabel::Tempo, "Coffee Beans", "5% growth");
    let second = generate_explanations(&result, MotifLabel::Tempo, "Coffee Beans", "5% growth");

    assert_eq!(first, second);
}
