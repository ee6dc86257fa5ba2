use statement_analysis_rs::{AnalysisBuilder, Bank, Report, View};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let file_path = if args.len() > 1 {
        &args[1]
    } else {
        println!("Using example CSV data from demos/sample.csv\n");
        "demos/sample.csv"
    };

    let content = std::fs::read_to_string(file_path)?;

    let report = AnalysisBuilder::new()
        .content(&content)
        .bank(Bank::Nubank)
        .report(View::DailySeries)?;

    let Report::DailySeries(series) = report else {
        unreachable!("DailySeries view always yields a DailySeries report");
    };

    println!("{:<12} {:>12} {:>12}", "Date", "Total", "Cumulative");
    for row in &series {
        println!(
            "{:<12} {:>12} {:>12}",
            row.date, row.amount_sum, row.cumulative_sum
        );
    }

    Ok(())
}
