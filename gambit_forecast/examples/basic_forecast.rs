use chrono::NaiveDate;
use gambit_forecast::adjustment::{recommend_adjustment, AdjustmentConfig};
use gambit_forecast::data::DemandSeries;
use gambit_forecast::explain::generate_explanations;
use gambit_forecast::models::forecast_demand;
use gambit_forecast::motif::classify_motif;
use gambit_forecast::stats::compute_stats;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Gambit Forecast: Basic Pipeline Example");
    println!("=======================================\n");

    // A year of monthly demand with a clear upward trend
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid start date")?;
    let series = DemandSeries::from_monthly(
        start,
        vec![
            100.0, 103.0, 105.5, 109.0, 114.0, 118.5, 124.0, 130.0, 137.0, 143.5, 151.0, 158.0,
        ],
    )?;

    println!("Computing statistics over {} observations...", series.len());
    let stats = compute_stats(&series)?;
    println!(
        "  mean {:.1}, cv {:.3}, trend {:+.2}/period, momentum {:+.3}\n",
        stats.mean, stats.coefficient_of_variation, stats.trend, stats.momentum
    );

    println!("Fitting forecast model...");
    let raw = forecast_demand(&series)?;
    println!("  model: {}", raw.model_name());
    println!("  raw forecast: {:?}", raw.values());

    let intervals = raw.confidence_intervals(0.95)?;
    println!("  95% intervals:");
    for (periods, (lower, upper)) in series.future_periods(raw.horizon())?.iter().zip(&intervals)
    {
        println!("    {}: ({:.1}, {:.1})", periods, lower, upper);
    }
    println!();

    let config = AdjustmentConfig::default();
    let result = recommend_adjustment(&stats, raw, &config);
    let motif = classify_motif(&stats, &result, &config);
    let texts = generate_explanations(&result, motif, "Premium Coffee Beans", "steady growth");

    println!("Adjustment: {:+.1}% ({:?})", result.adjustment_pct(), result.rule());
    println!("Motif:      {}", motif);
    println!("Standard:   {}", texts.standard_text);
    println!("Chess:      {}", texts.chess_text);

    Ok(())
}
