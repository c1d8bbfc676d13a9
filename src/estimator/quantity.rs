use crate::estimator::config::EstimatorConfig;
use crate::models::WasteRecord;

/// Recent waste level in kg.
///
/// Sums the last `waste_window` entries (fewer if the log is shorter) and
/// always divides by `waste_divisor`, so a one-entry log of 9 kg reads as 3 kg.
pub fn recent_waste(waste: &[WasteRecord], config: &EstimatorConfig) -> f64 {
    if waste.is_empty() {
        return config.fallback_waste_kg;
    }

    let start = waste.len().saturating_sub(config.waste_window);
    let sum: f64 = waste[start..].iter().map(|w| w.amount).sum();
    sum / config.waste_divisor
}

/// Two-level safety buffer: generous when little is being wasted.
pub fn waste_buffer(recent_waste: f64, config: &EstimatorConfig) -> f64 {
    if recent_waste < config.waste_threshold_kg {
        config.low_waste_buffer_kg
    } else {
        config.high_waste_buffer_kg
    }
}

/// Kilograms needed before the buffer.
pub fn base_quantity(student_count: i64, participation_rate: f64, config: &EstimatorConfig) -> f64 {
    student_count as f64 * participation_rate * config.avg_portion_kg
}

/// Final cook quantity, buffer included, rounded half to even.
pub fn cook_quantity(
    student_count: i64,
    participation_rate: f64,
    waste: &[WasteRecord],
    config: &EstimatorConfig,
) -> i64 {
    let base = base_quantity(student_count, participation_rate, config);
    let buffer = waste_buffer(recent_waste(waste, config), config);
    round_half_even(base + buffer)
}

/// Round to the nearest integer, ties to even.
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}
