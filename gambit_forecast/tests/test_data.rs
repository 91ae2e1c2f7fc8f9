use chrono::NaiveDate;
use gambit_forecast::data::{DataLoader, DemandSeries};
use std::io::Write;
use tempfile::NamedTempFile;

fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

#[test]
fn test_data_loader_from_csv() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "period,demand").unwrap();
    writeln!(file, "2024-01-01,100.0").unwrap();
    writeln!(file, "2024-02-01,102.5").unwrap();
    writeln!(file, "2024-03-01,105.0").unwrap();

    let series = DataLoader::from_csv(file.path()).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.values(), &[100.0, 102.5, 105.0]);
    assert_eq!(series.periods()[0], month(2024, 1));
}

#[test]
fn test_data_loader_detects_alternate_headers() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "month,quantity").unwrap();
    writeln!(file, "2024-01-01,40").unwrap();
    writeln!(file, "2024-02-01,42").unwrap();

    let series = DataLoader::from_csv(file.path()).unwrap();
    assert_eq!(series.values(), &[40.0, 42.0]);
}

#[test]
fn test_data_loader_rejects_unknown_columns() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "foo,bar").unwrap();
    writeln!(file, "2024-01-01,1.0").unwrap();

    assert!(DataLoader::from_csv(file.path()).is_err());
}

#[test]
fn test_data_loader_rejects_bad_values() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "period,demand").unwrap();
    writeln!(file, "2024-01-01,not-a-number").unwrap();

    assert!(DataLoader::from_csv(file.path()).is_err());
}

#[test]
fn test_from_monthly_synthesizes_labels() {
    let series = DemandSeries::from_monthly(month(2024, 11), vec![1.0, 2.0, 3.0]).unwrap();

    assert_eq!(
        series.periods(),
        &[month(2024, 11), month(2024, 12), month(2025, 1)]
    );
}

#[test]
fn test_future_periods_continue_monthly() {
    let series = DemandSeries::from_monthly(month(2024, 1), vec![1.0, 2.0, 3.0]).unwrap();
    let future = series.future_periods(3).unwrap();

    assert_eq!(future, vec![month(2024, 4), month(2024, 5), month(2024, 6)]);
}

#[test]
fn test_series_validation() {
    assert!(DemandSeries::from_monthly(month(2024, 1), vec![]).is_err());
    assert!(DemandSeries::from_monthly(month(2024, 1), vec![1.0, f64::NAN]).is_err());
    assert!(DemandSeries::new(vec![month(2024, 1)], vec![1.0, 2.0]).is_err());
}

#[test]
fn test_series_summary_statistics() {
    let series = DemandSeries::from_monthly(month(2024, 1), vec![2.0, 4.0, 6.0]).unwrap();

    assert!((series.mean().unwrap() - 4.0).abs() < 1e-12);
    assert!(series.std_dev().unwrap() > 0.0);
    assert!(!series.is_empty());
}
