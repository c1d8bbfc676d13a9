use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::estimator::constants::AVG_PORTION_KG;

/// meal_demand: predicts the top meal, expected turnout and how much to cook.
#[derive(Parser, Debug)]
#[command(name = "meal_demand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the input JSON document.
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Pretty-print the JSON report.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Use this roster size instead of the one in the input.
    #[arg(long, global = true)]
    pub student_count: Option<i64>,

    /// Kilograms served per student.
    #[arg(long, global = true, default_value_t = AVG_PORTION_KG)]
    pub portion_kg: f64,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Predict demand from a document with feedbacks, waste, attendance and student_count.
    Predict,

    /// Predict demand from a full store snapshot (roster size taken from student users).
    Snapshot,

    /// Show per-meal rating statistics.
    Stats {
        /// Also write the statistics to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Predict
    }
}
