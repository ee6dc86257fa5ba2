use statement_analysis_rs::{AnalysisBuilder, Bank};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Check if a file path was provided as a command-line argument
    let args: Vec<String> = env::args().collect();

    let file_path = if args.len() > 1 {
        &args[1]
    } else {
        println!("Using example CSV data from demos/sample.csv\n");
        "demos/sample.csv"
    };

    let content = std::fs::read_to_string(file_path)?;

    let transactions = AnalysisBuilder::new()
        .content(&content)
        .bank(Bank::Nubank)
        .normalize()?;

    println!("Found {} transactions\n", transactions.len());

    for (i, tx) in transactions.iter().take(10).enumerate() {
        println!("Transaction {}:", i + 1);
        println!("  Date: {}", tx.date);
        println!("  Title: {}", tx.title);
        println!("  Amount: {}", tx.amount);
        println!("  Category: {}", tx.category);
        println!();
    }

    if transactions.len() > 10 {
        println!("... and {} more transactions", transactions.len() - 10);
    }

    Ok(())
}
