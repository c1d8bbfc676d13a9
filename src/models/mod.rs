mod records;
mod recommendation;

pub use records::{AttendanceRecord, FeedbackRecord, StudentId, WasteRecord};
pub use recommendation::{MealStats, PredictionReport, Recommendation};
