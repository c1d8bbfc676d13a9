use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::estimator::constants::{NO_DATA_MEAL_NAME, NO_DATA_REASON};

/// The single record produced by one estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Top performing meal, always one of the rated meal names.
    pub meal_name: String,

    /// Expected participation, 0 to 100 for well-formed input.
    pub demand_percentage: i64,

    /// Kilograms to cook, buffer included.
    pub cook_quantity: i64,

    /// Mean rating of the top meal rounded to one decimal. Absent for "No Data".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    pub reason: String,
}

impl Recommendation {
    /// The sentinel returned when there is no feedback at all.
    pub fn no_data() -> Self {
        Self {
            meal_name: NO_DATA_MEAL_NAME.to_string(),
            demand_percentage: 0,
            cook_quantity: 0,
            rating: None,
            reason: NO_DATA_REASON.to_string(),
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.rating.is_none() && self.meal_name == NO_DATA_MEAL_NAME
    }
}

/// Per-meal aggregate of the feedback collection.
#[derive(Debug, Clone, PartialEq)]
pub struct MealStats {
    pub meal_name: String,
    pub mean_rating: f64,
    pub vote_count: usize,
}

/// What the process boundary prints: a recommendation or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionReport {
    Recommendation(Recommendation),
    Failure { error: String },
}

impl PredictionReport {
    pub fn failure(message: impl Into<String>) -> Self {
        PredictionReport::Failure {
            error: message.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PredictionReport::Failure { .. })
    }
}

impl From<Result<Recommendation>> for PredictionReport {
    fn from(result: Result<Recommendation>) -> Self {
        match result {
            Ok(rec) => PredictionReport::Recommendation(rec),
            Err(e) => PredictionReport::failure(e.to_string()),
        }
    }
}
