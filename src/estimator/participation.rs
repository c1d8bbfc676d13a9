use std::collections::{HashMap, HashSet};

use crate::estimator::config::EstimatorConfig;
use crate::models::{AttendanceRecord, StudentId};

/// Mean over dates of the number of distinct students present that date.
///
/// Returns `None` for an empty attendance log.
pub fn mean_daily_presence(attendance: &[AttendanceRecord]) -> Option<f64> {
    if attendance.is_empty() {
        return None;
    }

    let mut by_date: HashMap<&str, HashSet<&StudentId>> = HashMap::new();
    for record in attendance {
        by_date
            .entry(record.date.as_str())
            .or_default()
            .insert(&record.student_id);
    }

    let total: usize = by_date.values().map(HashSet::len).sum();
    Some(total as f64 / by_date.len() as f64)
}

/// Fraction of students expected to eat.
///
/// Observed attendance always wins over the rating heuristic.
pub fn participation_rate(
    attendance: &[AttendanceRecord],
    top_rating: f64,
    student_count: i64,
    config: &EstimatorConfig,
) -> f64 {
    match mean_daily_presence(attendance) {
        Some(presence) if student_count > 0 => presence / student_count as f64,
        Some(_) => config.empty_roster_participation,
        None => rating_participation(top_rating, config),
    }
}

/// Heuristic participation from the rating alone: a perfect meal draws the peak.
///
/// Not clamped; an out-of-range rating scales straight through.
pub fn rating_participation(top_rating: f64, config: &EstimatorConfig) -> f64 {
    (top_rating / config.full_rating) * config.peak_participation
}
