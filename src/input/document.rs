use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DemandError, Result};
use crate::estimator::{estimate_with, EstimatorConfig};
use crate::models::{AttendanceRecord, FeedbackRecord, Recommendation, WasteRecord};

pub const FEEDBACKS_KEY: &str = "feedbacks";
pub const WASTE_KEY: &str = "waste";
pub const ATTENDANCE_KEY: &str = "attendance";
pub const STUDENT_COUNT_KEY: &str = "student_count";

/// Lazy view over an input document.
///
/// Collections are only parsed when asked for, so a bad waste log does not
/// matter when there is no feedback to act on.
#[derive(Debug, Clone, Copy)]
pub struct DemandDocument<'a> {
    root: &'a Map<String, Value>,
}

impl<'a> DemandDocument<'a> {
    pub fn from_value(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(DemandError::InvalidInput(format!(
                "expected a JSON object at the top level, got {}",
                kind(other)
            ))),
        }
    }

    pub fn feedbacks(&self) -> Result<Vec<FeedbackRecord>> {
        parse_collection(self.root, FEEDBACKS_KEY, "feedback")
    }

    pub fn waste(&self) -> Result<Vec<WasteRecord>> {
        parse_collection(self.root, WASTE_KEY, "waste")
    }

    pub fn attendance(&self) -> Result<Vec<AttendanceRecord>> {
        parse_collection(self.root, ATTENDANCE_KEY, "attendance")
    }

    /// `student_count`, or `default` when missing or null.
    pub fn student_count(&self, default: i64) -> Result<i64> {
        match self.root.get(STUDENT_COUNT_KEY) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0)
                        .filter(|f| (i64::MIN as f64..i64::MAX as f64).contains(f))
                        .map(|f| f as i64)
                })
                .ok_or_else(|| {
                    DemandError::InvalidInput(format!(
                        "`{}` must be a whole number, got {}",
                        STUDENT_COUNT_KEY, n
                    ))
                }),
            Some(other) => Err(DemandError::InvalidInput(format!(
                "`{}` must be a number, got {}",
                STUDENT_COUNT_KEY,
                kind(other)
            ))),
        }
    }
}

/// Run the estimator over a parsed input document.
pub fn estimate_document(value: &Value, config: &EstimatorConfig) -> Result<Recommendation> {
    let doc = DemandDocument::from_value(value)?;

    let feedbacks = doc.feedbacks()?;
    if feedbacks.is_empty() {
        return Ok(Recommendation::no_data());
    }

    let waste = doc.waste()?;
    let attendance = doc.attendance()?;
    let student_count = doc.student_count(config.default_student_count)?;

    debug!(
        feedbacks = feedbacks.len(),
        waste = waste.len(),
        attendance = attendance.len(),
        student_count,
        "parsed demand document"
    );

    Ok(estimate_with(
        config,
        &feedbacks,
        &waste,
        &attendance,
        student_count,
    ))
}

/// Replace (or add) `student_count` on a document object. Other values are left alone.
pub fn override_student_count(value: &mut Value, student_count: i64) {
    if let Value::Object(root) = value {
        root.insert(STUDENT_COUNT_KEY.to_string(), Value::from(student_count));
    }
}

/// Parse `root[key]` record by record. Missing or null means empty.
fn parse_collection<T: DeserializeOwned>(
    root: &Map<String, Value>,
    key: &str,
    collection: &'static str,
) -> Result<Vec<T>> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                T::deserialize(item).map_err(|e| DemandError::MalformedRecord {
                    collection,
                    index,
                    message: e.to_string(),
                })
            })
            .collect(),
        Some(other) => Err(DemandError::InvalidInput(format!(
            "`{}` must be a list, got {}",
            key,
            kind(other)
        ))),
    }
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
