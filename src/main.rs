use std::path::Path;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use meal_demand_rs::cli::{Cli, Command};
use meal_demand_rs::error::{DemandError, Result};
use meal_demand_rs::estimator::{meal_stats, EstimatorConfig};
use meal_demand_rs::input::{
    estimate_document, load_document, override_student_count, snapshot_to_document,
    DemandDocument,
};
use meal_demand_rs::interface::{display_meal_stats, render_report, write_stats_csv};
use meal_demand_rs::models::{PredictionReport, Recommendation};

fn main() {
    init_logging();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or_default();

    match command {
        Command::Predict => print_report(cmd_predict(&cli, false), cli.pretty),
        Command::Snapshot => print_report(cmd_predict(&cli, true), cli.pretty),
        Command::Stats { csv } => {
            if let Err(e) = cmd_stats(&cli, csv.as_deref()) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Diagnostics go to stderr so stdout carries only the report.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the input, estimate, and hand back the recommendation or the failure.
fn cmd_predict(cli: &Cli, snapshot: bool) -> Result<Recommendation> {
    let path = cli.file.as_deref().ok_or(DemandError::NoInputFile)?;
    let config = EstimatorConfig::default().with_portion_kg(cli.portion_kg);

    let mut value = load_document(path)?;
    if snapshot {
        value = snapshot_to_document(&value, config.default_student_count)?;
    }
    if let Some(count) = cli.student_count {
        override_student_count(&mut value, count);
    }

    estimate_document(&value, &config)
}

/// Print the report as JSON. Never fails the process.
fn print_report(result: Result<Recommendation>, pretty: bool) {
    if let Err(e) = &result {
        warn!(error = %e, "prediction failed");
    }

    let report = PredictionReport::from(result);
    match render_report(&report, pretty) {
        Ok(text) => println!("{}", text),
        Err(e) => println!("{}", serde_json::json!({ "error": e.to_string() })),
    }
}

/// Show per-meal rating statistics.
fn cmd_stats(cli: &Cli, csv_path: Option<&Path>) -> Result<()> {
    let path = cli.file.as_deref().ok_or(DemandError::NoInputFile)?;
    let value = load_document(path)?;
    let feedbacks = DemandDocument::from_value(&value)?.feedbacks()?;

    let stats = meal_stats(&feedbacks);
    display_meal_stats(&stats);

    if let Some(csv_path) = csv_path {
        write_stats_csv(&stats, csv_path)?;
        println!("Wrote meal statistics to {:?}", csv_path);
    }

    Ok(())
}
