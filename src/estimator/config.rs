use crate::estimator::constants::*;

/// Knobs of the demand formula. `Default` reproduces the fixed policy.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    pub default_student_count: i64,
    pub avg_portion_kg: f64,
    pub full_rating: f64,
    pub peak_participation: f64,
    pub empty_roster_participation: f64,
    pub waste_window: usize,
    pub waste_divisor: f64,
    pub fallback_waste_kg: f64,
    pub waste_threshold_kg: f64,
    pub low_waste_buffer_kg: f64,
    pub high_waste_buffer_kg: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_student_count: DEFAULT_STUDENT_COUNT,
            avg_portion_kg: AVG_PORTION_KG,
            full_rating: FULL_RATING,
            peak_participation: PEAK_PARTICIPATION,
            empty_roster_participation: EMPTY_ROSTER_PARTICIPATION,
            waste_window: WASTE_WINDOW,
            waste_divisor: WASTE_DIVISOR,
            fallback_waste_kg: FALLBACK_WASTE_KG,
            waste_threshold_kg: WASTE_THRESHOLD_KG,
            low_waste_buffer_kg: LOW_WASTE_BUFFER_KG,
            high_waste_buffer_kg: HIGH_WASTE_BUFFER_KG,
        }
    }
}

impl EstimatorConfig {
    /// Override the portion size, keeping everything else.
    pub fn with_portion_kg(mut self, portion_kg: f64) -> Self {
        self.avg_portion_kg = portion_kg;
        self
    }
}
