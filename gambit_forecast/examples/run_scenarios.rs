use gambit_forecast::adjustment::AdjustmentConfig;
use gambit_forecast::runner::run_all_scenarios;
use gambit_forecast::scenarios::all_scenarios;

fn main() {
    env_logger::init();

    println!("{}", "=".repeat(80));
    println!("CHESS-MOTIF XAI FOR DEMAND FORECASTING");
    println!("{}", "=".repeat(80));
    println!();

    let scenarios = all_scenarios();
    let summary = run_all_scenarios(&scenarios, &AdjustmentConfig::default());

    for report in &summary.reports {
        println!("[{}] {}", report.scenario_id, report.product);
        println!("    Context:    {}", report.context);
        println!("    Motif:      {}", report.motif);
        println!(
            "    Adjustment: {:+.1}%",
            report.forecast.adjustment_pct()
        );
        println!(
            "    Forecast:   {}",
            report
                .forecast
                .adjusted_forecast()
                .iter()
                .map(|v| format!("{:.1}", v))
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("    Standard:   {}", report.explanations.standard_text);
        println!("    Chess:      {}", report.explanations.chess_text);
        println!();
    }

    if !summary.failures.is_empty() {
        println!("{}", "-".repeat(80));
        println!("FAILED SCENARIOS");
        println!("{}", "-".repeat(80));
        for failure in &summary.failures {
            println!(
                "[{}] {}: {}",
                failure.scenario_id, failure.product, failure.error
            );
        }
        println!();
    }

    println!("{}", "-".repeat(80));
    println!("MOTIF DISTRIBUTION");
    println!("{}", "-".repeat(80));
    let distribution = summary.motif_distribution();
    for (motif, count) in &distribution {
        println!("    {:<15} {} scenario(s)", motif.to_string(), count);
    }
    println!(
        "    {:<15} {} scenarios, {} unique motifs",
        "TOTAL",
        summary.reports.len(),
        distribution.len()
    );
}
