use std::path::Path;

use crate::error::Result;
use crate::estimator::ranked;
use crate::models::MealStats;

/// Write per-meal statistics to a CSV file, best rated first.
pub fn write_stats_csv(stats: &[MealStats], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["rank", "meal_name", "mean_rating", "vote_count"])?;

    for (i, meal) in ranked(stats).into_iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            meal.meal_name.clone(),
            format!("{:.2}", meal.mean_rating),
            meal.vote_count.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
