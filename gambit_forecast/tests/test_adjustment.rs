use gambit_forecast::adjustment::{
    evaluate_rules, recommend_adjustment, AdjustmentConfig, AdjustmentRule,
};
use gambit_forecast::models::RawForecast;
use gambit_forecast::stats::SeriesStatistics;
use rstest::rstest;

fn stats(cv: f64, relative_trend: f64, momentum: f64) -> SeriesStatistics {
    let mean = 100.0;
    SeriesStatistics {
        mean,
        coefficient_of_variation: cv,
        trend: relative_trend * mean,
        momentum,
    }
}

fn raw_forecast(values: Vec<f64>) -> RawForecast {
    let horizon = values.len();
    RawForecast::new(values, horizon, "Test".to_string(), 1.0).unwrap()
}

#[rstest]
#[case::high_volatility(stats(0.8, 0.0, 0.0), AdjustmentRule::HighVolatility)]
#[case::trend_surge(stats(0.1, 0.05, 0.2), AdjustmentRule::TrendSurge)]
#[case::trend_collapse(stats(0.1, -0.05, -0.2), AdjustmentRule::TrendCollapse)]
#[case::steady(stats(0.1, 0.001, 0.0), AdjustmentRule::Steady)]
#[case::conflict(stats(0.1, 0.03, -0.06), AdjustmentRule::RecencyBias)]
#[case::weak_aligned(stats(0.3, 0.012, 0.048), AdjustmentRule::RecencyBias)]
fn test_rule_selection(#[case] stats: SeriesStatistics, #[case] expected: AdjustmentRule) {
    let (rule, _) = evaluate_rules(&stats, &AdjustmentConfig::default());
    assert_eq!(rule, expected);
}

#[rstest]
#[case::volatility_buffers_down(stats(0.9, 0.0, 0.0))]
#[case::surge_raises(stats(0.1, 0.05, 0.2))]
#[case::collapse_lowers(stats(0.1, -0.05, -0.2))]
fn test_rule_direction(#[case] stats: SeriesStatistics) {
    let (rule, pct) = evaluate_rules(&stats, &AdjustmentConfig::default());
    match rule {
        AdjustmentRule::HighVolatility | AdjustmentRule::TrendCollapse => assert!(pct < 0.0),
        AdjustmentRule::TrendSurge => assert!(pct > 0.0),
        other => panic!("Unexpected rule {:?}", other),
    }
}

#[rstest]
#[case(stats(0.0, 0.0, 0.0))]
#[case(stats(5.0, 0.0, 0.0))]
#[case(stats(0.1, 2.0, 2.0))]
#[case(stats(0.1, -2.0, -2.0))]
#[case(stats(0.1, 0.5, -0.9))]
#[case(stats(0.4, -0.01, 0.9))]
#[case(stats(10.0, 10.0, 10.0))]
fn test_adjustment_is_always_clamped(#[case] stats: SeriesStatistics) {
    let config = AdjustmentConfig::default();
    let (_, pct) = evaluate_rules(&stats, &config);

    assert!(pct >= -config.max_adjustment_pct);
    assert!(pct <= config.max_adjustment_pct);
}

#[test]
fn test_steady_means_zero_adjustment() {
    let (rule, pct) = evaluate_rules(&stats(0.1, 0.0, 0.0), &AdjustmentConfig::default());
    assert_eq!(rule, AdjustmentRule::Steady);
    assert_eq!(pct, 0.0);
}

#[test]
fn test_recency_lean_is_small_and_follows_momentum() {
    let config = AdjustmentConfig::default();

    let (rule, pct) = evaluate_rules(&stats(0.1, 0.03, -0.06), &config);
    assert_eq!(rule, AdjustmentRule::RecencyBias);
    assert!(pct < 0.0);
    assert!(pct.abs() <= config.recency_cap);

    // Momentum within noise leaves the forecast untouched
    let (_, pct) = evaluate_rules(&stats(0.1, 0.03, 0.001), &config);
    assert_eq!(pct, 0.0);
}

#[test]
fn test_adjusted_forecast_is_exact_elementwise() {
    let stats = stats(0.1, 0.05, 0.2);
    let config = AdjustmentConfig::default();
    let raw = raw_forecast(vec![100.0, 110.0, 121.0, 133.1, 146.4, 161.1]);
    let raw_values = raw.values().to_vec();

    let result = recommend_adjustment(&stats, raw, &config);
    let pct = result.adjustment_pct();

    assert_eq!(result.raw_forecast(), raw_values.as_slice());
    for (adjusted, raw) in result.adjusted_forecast().iter().zip(raw_values.iter()) {
        assert_eq!(*adjusted, raw * (1.0 + pct / 100.0));
    }
}

#[test]
fn test_raw_forecast_is_preserved() {
    let stats = stats(0.8, 0.0, 0.0);
    let raw = raw_forecast(vec![50.0; 6]);

    let result = recommend_adjustment(&stats, raw, &AdjustmentConfig::default());

    assert_eq!(result.raw_forecast(), &[50.0; 6]);
    assert!(result.adjusted_forecast().iter().all(|v| *v < 50.0));
    assert_eq!(result.rule(), AdjustmentRule::HighVolatility);
}

#[test]
fn test_default_config_reference_values() {
    let config = AdjustmentConfig::default();

    assert_eq!(config.volatility_high, 0.5);
    assert_eq!(config.max_adjustment_pct, 20.0);
    assert!(config.trend_mild < config.trend_strong);
    assert!(config.momentum_noise < config.momentum_strong);
    assert!(config.recency_cap < config.volatility_cut_max);
    assert!(config.volatility_cut_max < config.trend_swing_max);
}
