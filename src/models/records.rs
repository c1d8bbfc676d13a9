use serde::{Deserialize, Serialize};

/// A single student rating of a served meal.
///
/// Ratings are nominally 0 to 5 but are never clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    #[serde(rename = "mealName")]
    pub meal_name: String,

    pub rating: f64,

    /// Opaque record id, only ever counted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
}

impl FeedbackRecord {
    pub fn new(meal_name: impl Into<String>, rating: f64) -> Self {
        Self {
            meal_name: meal_name.into(),
            rating,
            id: None,
        }
    }

    /// Canonical key for grouping (exact meal name).
    #[inline]
    pub fn key(&self) -> &str {
        &self.meal_name
    }
}

/// Student identifier as stored by the back-end: either a number or a string.
///
/// `1` and `"1"` are different students.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentId {
    Number(i64),
    Text(String),
}

impl From<&str> for StudentId {
    fn from(value: &str) -> Self {
        StudentId::Text(value.to_string())
    }
}

impl From<i64> for StudentId {
    fn from(value: i64) -> Self {
        StudentId::Number(value)
    }
}

/// One student marked present on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "dateStr")]
    pub date: String,

    #[serde(rename = "studentId")]
    pub student_id: StudentId,
}

impl AttendanceRecord {
    pub fn new(date: impl Into<String>, student_id: impl Into<StudentId>) -> Self {
        Self {
            date: date.into(),
            student_id: student_id.into(),
        }
    }
}

/// Kilograms of food thrown away, logged in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WasteRecord {
    pub amount: f64,
}

impl WasteRecord {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}
