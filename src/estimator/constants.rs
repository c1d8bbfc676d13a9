/// Student count assumed when the input does not say.
pub const DEFAULT_STUDENT_COUNT: i64 = 200;

/// Kilograms served per student (400 g).
pub const AVG_PORTION_KG: f64 = 0.4;

/// Rating that counts as a perfect meal.
pub const FULL_RATING: f64 = 5.0;

/// Participation a perfect meal is assumed to draw when there is no attendance.
pub const PEAK_PARTICIPATION: f64 = 0.95;

/// Participation used when attendance exists but the roster is empty.
pub const EMPTY_ROSTER_PARTICIPATION: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Waste buffer
// ─────────────────────────────────────────────────────────────────────────────

/// Number of most recent waste entries considered.
pub const WASTE_WINDOW: usize = 3;

/// Divisor applied to the recent waste sum. Stays 3 even with fewer entries.
pub const WASTE_DIVISOR: f64 = 3.0;

/// Recent waste assumed when nothing has been logged.
pub const FALLBACK_WASTE_KG: f64 = 5.0;

/// Recent waste at or above this switches to the small buffer.
pub const WASTE_THRESHOLD_KG: f64 = 10.0;

/// Buffer added when recent waste is low.
pub const LOW_WASTE_BUFFER_KG: f64 = 5.0;

/// Buffer added when recent waste is high.
pub const HIGH_WASTE_BUFFER_KG: f64 = 2.0;

// ─────────────────────────────────────────────────────────────────────────────
// Output text
// ─────────────────────────────────────────────────────────────────────────────

pub const NO_DATA_MEAL_NAME: &str = "No Data";

pub const NO_DATA_REASON: &str = "No feedback data available yet.";

/// Reason line for a real recommendation.
pub fn top_meal_reason(rounded_rating: f64) -> String {
    format!(
        "Highest rated meal ({:.1}★) with strong participation trends.",
        rounded_rating
    )
}
