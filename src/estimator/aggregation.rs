use std::collections::HashMap;

use crate::models::{FeedbackRecord, MealStats};

/// Group feedback by meal name and average the ratings.
///
/// Meals come back in the order they first appear in `feedbacks`.
pub fn meal_stats(feedbacks: &[FeedbackRecord]) -> Vec<MealStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut sums: Vec<(&str, f64, usize)> = Vec::new();

    for record in feedbacks {
        match index.get(record.key()) {
            Some(&i) => {
                let entry = &mut sums[i];
                entry.1 += record.rating;
                entry.2 += 1;
            }
            None => {
                index.insert(record.key(), sums.len());
                sums.push((record.key(), record.rating, 1));
            }
        }
    }

    sums.into_iter()
        .map(|(name, total, count)| MealStats {
            meal_name: name.to_string(),
            mean_rating: total / count as f64,
            vote_count: count,
        })
        .collect()
}

/// Pick the meal with the highest mean rating.
///
/// Linear scan keeping the first maximum seen, so ties go to the earlier meal.
pub fn top_meal(stats: &[MealStats]) -> Option<&MealStats> {
    let mut best: Option<&MealStats> = None;
    for candidate in stats {
        match best {
            Some(current) if candidate.mean_rating <= current.mean_rating => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Meals ordered by mean rating, highest first. Ties keep first-seen order.
pub fn ranked(stats: &[MealStats]) -> Vec<&MealStats> {
    let mut sorted: Vec<&MealStats> = stats.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| {
        b.mean_rating
            .partial_cmp(&a.mean_rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}
