use tracing::debug;

use crate::estimator::aggregation::{meal_stats, top_meal};
use crate::estimator::config::EstimatorConfig;
use crate::estimator::constants::top_meal_reason;
use crate::estimator::participation::participation_rate;
use crate::estimator::quantity::{cook_quantity, round_half_even};
use crate::models::{AttendanceRecord, FeedbackRecord, Recommendation, WasteRecord};

/// Estimate next-meal demand with the default policy.
pub fn estimate(
    feedbacks: &[FeedbackRecord],
    waste: &[WasteRecord],
    attendance: &[AttendanceRecord],
    student_count: i64,
) -> Recommendation {
    estimate_with(
        &EstimatorConfig::default(),
        feedbacks,
        waste,
        attendance,
        student_count,
    )
}

/// Estimate next-meal demand.
///
/// 1. No feedback: the "No Data" sentinel, nothing else is looked at
/// 2. Top meal = highest mean rating, first seen wins ties
/// 3. Participation from attendance, else from the rating
/// 4. Cook quantity = students * participation * portion + waste buffer
pub fn estimate_with(
    config: &EstimatorConfig,
    feedbacks: &[FeedbackRecord],
    waste: &[WasteRecord],
    attendance: &[AttendanceRecord],
    student_count: i64,
) -> Recommendation {
    let stats = meal_stats(feedbacks);
    let Some(top) = top_meal(&stats) else {
        debug!("no feedback, returning sentinel");
        return Recommendation::no_data();
    };

    let rate = participation_rate(attendance, top.mean_rating, student_count, config);
    let demand_percentage = round_half_even(rate * 100.0);
    let cook_qty = cook_quantity(student_count, rate, waste, config);
    let rating = round_to_tenth(top.mean_rating);

    debug!(
        meal = %top.meal_name,
        votes = top.vote_count,
        mean_rating = top.mean_rating,
        participation = rate,
        student_count,
        "selected top meal"
    );

    Recommendation {
        meal_name: top.meal_name.clone(),
        demand_percentage,
        cook_quantity: cook_qty,
        rating: Some(rating),
        reason: top_meal_reason(rating),
    }
}

/// Round to one decimal place.
///
/// Goes through the decimal form so the stored double is rounded as-is:
/// 3.45 is stored just above 3.45 and gives 3.5.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(5.0), 5.0);
        assert_eq!(round_to_tenth(4.333_333), 4.3);
        assert_eq!(round_to_tenth(3.66), 3.7);
        assert_eq!(round_to_tenth(3.45), 3.5);
        assert_eq!(round_to_tenth(4.35), 4.3);
        assert_eq!(round_to_tenth(4.25), 4.2);
    }

    #[test]
    fn test_empty_feedback_ignores_everything_else() {
        let rec = estimate(
            &[],
            &[WasteRecord::new(99.0)],
            &[AttendanceRecord::new("d", 1)],
            0,
        );
        assert_eq!(rec, Recommendation::no_data());
    }

    #[test]
    fn test_reason_embeds_rounded_rating() {
        let feedbacks = vec![
            FeedbackRecord::new("Khichdi", 4.0),
            FeedbackRecord::new("Khichdi", 4.0),
            FeedbackRecord::new("Khichdi", 5.0),
        ];
        let rec = estimate(&feedbacks, &[], &[], 200);
        assert_eq!(rec.rating, Some(4.3));
        assert_eq!(
            rec.reason,
            "Highest rated meal (4.3★) with strong participation trends."
        );
    }

    #[test]
    fn test_custom_portion() {
        let feedbacks = vec![FeedbackRecord::new("Rice", 5.0)];
        let config = EstimatorConfig::default().with_portion_kg(0.5);
        // 200 * 0.95 * 0.5 = 95, + 5
        let rec = estimate_with(&config, &feedbacks, &[], &[], 200);
        assert_eq!(rec.cook_quantity, 100);
        assert_eq!(rec.demand_percentage, 95);
    }
}
