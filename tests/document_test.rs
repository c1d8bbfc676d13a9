use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use meal_demand_rs::error::DemandError;
use meal_demand_rs::estimator::EstimatorConfig;
use meal_demand_rs::input::{
    estimate_document, load_document, override_student_count, snapshot_to_document,
};
use meal_demand_rs::interface::render_report;
use meal_demand_rs::models::PredictionReport;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn report_for(value: &serde_json::Value) -> String {
    let result = estimate_document(value, &EstimatorConfig::default());
    render_report(&PredictionReport::from(result), false).unwrap()
}

#[test]
fn test_predict_from_file() {
    let file = write_temp(
        r#"{
            "feedbacks": [
                {"mealName": "Rice", "rating": 5, "id": 1},
                {"mealName": "Rice", "rating": 5, "id": 2}
            ],
            "waste": [],
            "attendance": [],
            "student_count": 200
        }"#,
    );

    let value = load_document(file.path()).unwrap();
    assert_eq!(
        report_for(&value),
        r#"{"meal_name":"Rice","demand_percentage":95,"cook_quantity":81,"rating":5.0,"reason":"Highest rated meal (5.0★) with strong participation trends."}"#
    );
}

#[test]
fn test_missing_student_count_defaults_to_200() {
    let value = json!({"feedbacks": [{"mealName": "Rice", "rating": 5, "id": 1}]});
    let rec = estimate_document(&value, &EstimatorConfig::default()).unwrap();
    assert_eq!(rec.cook_quantity, 81);
}

#[test]
fn test_empty_feedback_document() {
    let value = json!({
        "feedbacks": [],
        "waste": [{"amount": 40}],
        "attendance": [{"dateStr": "2024-03-01", "studentId": "s1"}],
        "student_count": 10
    });
    assert_eq!(
        report_for(&value),
        r#"{"meal_name":"No Data","demand_percentage":0,"cook_quantity":0,"reason":"No feedback data available yet."}"#
    );
}

#[test]
fn test_missing_rating_becomes_error_report() {
    let value = json!({"feedbacks": [{"mealName": "Rice", "id": 1}]});

    let err = estimate_document(&value, &EstimatorConfig::default()).unwrap_err();
    assert!(matches!(err, DemandError::MalformedRecord { index: 0, .. }));

    let report: serde_json::Value = serde_json::from_str(&report_for(&value)).unwrap();
    let message = report["error"].as_str().unwrap();
    assert!(message.contains("feedback record at index 0"));
    assert!(message.contains("rating"));
    assert!(report.get("meal_name").is_none());
}

#[test]
fn test_non_numeric_waste_becomes_error_report() {
    let value = json!({
        "feedbacks": [{"mealName": "Rice", "rating": 4, "id": 1}],
        "waste": [{"amount": 2}, {"amount": "a lot"}]
    });
    let report: serde_json::Value = serde_json::from_str(&report_for(&value)).unwrap();
    assert!(
        report["error"]
            .as_str()
            .unwrap()
            .contains("waste record at index 1")
    );
}

#[test]
fn test_invalid_json_file_is_reported() {
    let file = write_temp("{\"feedbacks\": [");
    let result = load_document(file.path());
    let report = PredictionReport::from(result.and_then(|v| {
        estimate_document(&v, &EstimatorConfig::default())
    }));
    assert!(report.is_failure());
}

#[test]
fn test_snapshot_end_to_end() {
    let file = write_temp(
        r#"{
            "users": [
                {"name": "Asha", "role": "student"},
                {"name": "Ravi", "role": "student"},
                {"name": "Meena", "role": "student"},
                {"name": "Admin", "role": "admin"}
            ],
            "feedbacks": [
                {"mealName": "Poha", "rating": 4, "id": "f1", "studentId": "u1"},
                {"mealName": "Idli", "rating": 3, "id": "f2", "studentId": "u2"}
            ],
            "waste": [{"id": "w1", "date": "2024-03-01", "amount": 1.5}],
            "attendance": [
                {"studentId": "u1", "mealType": "Lunch", "dateStr": "2024-03-01"},
                {"studentId": "u2", "mealType": "Lunch", "dateStr": "2024-03-01"},
                {"studentId": "u2", "mealType": "Dinner", "dateStr": "2024-03-01"}
            ],
            "menus": []
        }"#,
    );

    let snapshot = load_document(file.path()).unwrap();
    let doc = snapshot_to_document(&snapshot, 200).unwrap();
    assert_eq!(doc["student_count"], 3);

    let rec = estimate_document(&doc, &EstimatorConfig::default()).unwrap();
    assert_eq!(rec.meal_name, "Poha");
    // 2 distinct of 3 students
    assert_eq!(rec.demand_percentage, 67);
    // 3 * (2/3) * 0.4 + 5 = 5.8
    assert_eq!(rec.cook_quantity, 6);
}

#[test]
fn test_snapshot_without_students_uses_default_roster() {
    let snapshot = json!({
        "users": [],
        "feedbacks": [{"mealName": "Rice", "rating": 5, "id": 1}]
    });
    let doc = snapshot_to_document(&snapshot, 200).unwrap();
    let rec = estimate_document(&doc, &EstimatorConfig::default()).unwrap();
    assert_eq!(rec.cook_quantity, 81);
}

#[test]
fn test_student_count_override() {
    let mut value = json!({
        "feedbacks": [{"mealName": "Rice", "rating": 5, "id": 1}],
        "student_count": 200
    });
    override_student_count(&mut value, 100);
    let rec = estimate_document(&value, &EstimatorConfig::default()).unwrap();
    // 100 * 0.95 * 0.4 = 38, + 5
    assert_eq!(rec.cook_quantity, 43);
}
