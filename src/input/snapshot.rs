use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{DemandError, Result};
use crate::input::document::{
    kind, ATTENDANCE_KEY, FEEDBACKS_KEY, STUDENT_COUNT_KEY, WASTE_KEY,
};

pub const USERS_KEY: &str = "users";

/// Role value that marks a user as part of the student roster.
pub const STUDENT_ROLE: &str = "student";

/// Count users whose `role` is exactly "student".
pub fn count_students(snapshot: &Value) -> Result<usize> {
    let root = as_object(snapshot)?;
    match root.get(USERS_KEY) {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Array(users)) => Ok(users
            .iter()
            .filter(|u| u.get("role").and_then(Value::as_str) == Some(STUDENT_ROLE))
            .count()),
        Some(other) => Err(DemandError::InvalidInput(format!(
            "`{}` must be a list, got {}",
            USERS_KEY,
            kind(other)
        ))),
    }
}

/// Turn a store snapshot into a demand document.
///
/// Collections are copied as-is (missing ones become empty lists). The roster
/// size is the number of student users, or `default_student_count` when there
/// are none.
pub fn snapshot_to_document(snapshot: &Value, default_student_count: i64) -> Result<Value> {
    let root = as_object(snapshot)?;
    let students = count_students(snapshot)?;

    let student_count = if students == 0 {
        warn!(
            default = default_student_count,
            "no student users in snapshot, using default roster size"
        );
        default_student_count
    } else {
        students as i64
    };

    let mut doc = Map::new();
    for key in [FEEDBACKS_KEY, WASTE_KEY, ATTENDANCE_KEY] {
        let collection = match root.get(key) {
            None | Some(Value::Null) => Value::Array(Vec::new()),
            Some(v) => v.clone(),
        };
        doc.insert(key.to_string(), collection);
    }
    doc.insert(STUDENT_COUNT_KEY.to_string(), Value::from(student_count));

    debug!(student_count, "assembled demand document from snapshot");
    Ok(Value::Object(doc))
}

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        DemandError::InvalidInput(format!(
            "expected a store snapshot object, got {}",
            kind(value)
        ))
    })
}
