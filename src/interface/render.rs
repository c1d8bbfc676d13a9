use crate::error::Result;
use crate::estimator::ranked;
use crate::models::{MealStats, PredictionReport};

/// Serialize a report as compact or pretty JSON.
pub fn render_report(report: &PredictionReport, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(text)
}

/// Display per-meal statistics, best rated first.
pub fn display_meal_stats(stats: &[MealStats]) {
    if stats.is_empty() {
        println!("No feedback data available yet.");
        return;
    }

    println!();
    println!("=== Meal Ratings ({} meals) ===", stats.len());
    println!();

    let max_name_len = stats.iter().map(|s| s.meal_name.len()).max().unwrap_or(10);
    let total_votes: usize = stats.iter().map(|s| s.vote_count).sum();

    for (i, meal) in ranked(stats).into_iter().enumerate() {
        let tag = if i == 0 { "  ★ top" } else { "" };
        println!(
            "{:>3}. {:<width$} - avg {:.2} | {:>4} votes{}",
            i + 1,
            meal.meal_name,
            meal.mean_rating,
            meal.vote_count,
            tag,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Total votes: {}", total_votes);
    println!();
}
