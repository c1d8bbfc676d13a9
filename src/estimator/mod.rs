pub mod aggregation;
pub mod config;
pub mod constants;
pub mod participation;
pub mod predict;
pub mod quantity;

pub use aggregation::{meal_stats, ranked, top_meal};
pub use config::EstimatorConfig;
pub use constants::*;
pub use participation::{mean_daily_presence, participation_rate, rating_participation};
pub use predict::{estimate, estimate_with, round_to_tenth};
pub use quantity::{base_quantity, cook_quantity, recent_waste, round_half_even, waste_buffer};
