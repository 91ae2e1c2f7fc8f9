use assert_approx_eq::assert_approx_eq;
use chrono::NaiveDate;
use gambit_forecast::data::DemandSeries;
use gambit_forecast::error::ForecastError;
use gambit_forecast::stats::compute_stats;

fn series(values: Vec<f64>) -> DemandSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    DemandSeries::from_monthly(start, values).unwrap()
}

#[test]
fn test_cv_is_zero_iff_constant() {
    let constant = series(vec![50.0; 8]);
    let stats = compute_stats(&constant).unwrap();
    assert_approx_eq!(stats.coefficient_of_variation, 0.0);

    let varying = series(vec![50.0, 51.0, 49.0, 50.0, 52.0, 48.0, 50.0, 50.0]);
    let stats = compute_stats(&varying).unwrap();
    assert!(stats.coefficient_of_variation > 0.0);
}

#[test]
fn test_growth_series_statistics() {
    let stats = compute_stats(&series(vec![100.0, 102.0, 105.0, 108.0, 112.0, 118.0])).unwrap();

    assert!(stats.trend > 0.0);
    assert!(stats.momentum > 0.0);
    assert!(stats.coefficient_of_variation < 0.1);
    // OLS slope of this series is 123/35
    assert_approx_eq!(stats.trend, 123.0 / 35.0, 1e-9);
    // Shorter than 9 observations, so momentum is the two-point delta
    assert_approx_eq!(stats.momentum, 6.0 / 112.0, 1e-9);
}

#[test]
fn test_thirds_momentum_on_long_series() {
    let values = vec![
        96.0, 98.0, 100.0, 102.0, 104.0, 106.0, 108.0, 110.0, 112.0, 114.0, 116.0, 118.0,
    ];
    let stats = compute_stats(&series(values)).unwrap();

    // Last third mean 115, prior third mean 107
    assert_approx_eq!(stats.momentum, 8.0 / 107.0, 1e-9);
}

#[test]
fn test_relative_trend_is_scale_free() {
    let small = compute_stats(&series(vec![100.0, 102.0, 105.0, 108.0, 112.0, 118.0])).unwrap();
    let large = compute_stats(&series(vec![
        1000.0, 1020.0, 1050.0, 1080.0, 1120.0, 1180.0,
    ]))
    .unwrap();

    assert_approx_eq!(small.relative_trend(), large.relative_trend(), 1e-9);
}

#[test]
fn test_single_observation_is_insufficient() {
    let result = compute_stats(&series(vec![120.0]));

    match result {
        Err(ForecastError::InsufficientData(_)) => (),
        other => panic!("Expected InsufficientData, got {:?}", other),
    }
}

#[test]
fn test_zero_mean_series_is_degenerate() {
    let result = compute_stats(&series(vec![40.0, -40.0, 35.0, -35.0]));

    match result {
        Err(ForecastError::DegenerateSeries(_)) => (),
        other => panic!("Expected DegenerateSeries, got {:?}", other),
    }
}

#[test]
fn test_constant_series_has_no_direction() {
    let stats = compute_stats(&series(vec![50.0; 8])).unwrap();

    assert_approx_eq!(stats.trend, 0.0);
    assert_approx_eq!(stats.momentum, 0.0);
    assert_approx_eq!(stats.mean, 50.0);
}
