pub mod cli;
pub mod error;
pub mod estimator;
pub mod input;
pub mod interface;
pub mod models;

pub use error::{DemandError, Result};
pub use estimator::{estimate, estimate_with, EstimatorConfig};
pub use models::{AttendanceRecord, FeedbackRecord, PredictionReport, Recommendation, WasteRecord};
