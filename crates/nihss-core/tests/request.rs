use nihss_core::error::CoreError;
use nihss_core::models::item::ScoreItem;
use nihss_core::models::request::AssessmentRequest;
use serde_json::json;

fn invalid_field(err: CoreError) -> String {
    match err {
        CoreError::InvalidInput { field, .. } => field,
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn coerces_integers_and_integer_strings() {
    let req = AssessmentRequest::from_json(&json!({
        "patient_age": "67",
        "patient_notes": "Onset 2h ago",
        "loc": 1,
        "best_language": "2",
        "motor_arm_left": 3.0,
    }))
    .unwrap();

    assert_eq!(req.patient.age, 67);
    assert_eq!(req.patient.notes, "Onset 2h ago");
    assert_eq!(req.scores.get(ScoreItem::Loc), 1);
    assert_eq!(req.scores.get(ScoreItem::BestLanguage), 2);
    assert_eq!(req.scores.get(ScoreItem::MotorArmLeft), 3);
    assert_eq!(req.scores.total(), 6);
}

#[test]
fn out_of_range_scores_are_clamped_not_rejected() {
    let req = AssessmentRequest::from_json(&json!({
        "patient_age": 50,
        "visual": 12,
        "sensory": -3,
    }))
    .unwrap();

    assert_eq!(req.scores.get(ScoreItem::Visual), 3);
    assert_eq!(req.scores.get(ScoreItem::Sensory), 0);
    assert_eq!(
        req.raw_scores,
        vec![(ScoreItem::Visual, 12), (ScoreItem::Sensory, -3)]
    );
}

#[test]
fn non_numeric_score_is_invalid_input() {
    let err = AssessmentRequest::from_json(&json!({
        "patient_age": 50,
        "dysarthria": "slurred",
    }))
    .unwrap_err();
    assert_eq!(invalid_field(err), "dysarthria");
}

#[test]
fn fractional_score_is_invalid_input() {
    let err = AssessmentRequest::from_json(&json!({
        "patient_age": 50,
        "loc": 1.5,
    }))
    .unwrap_err();
    assert_eq!(invalid_field(err), "loc");
}

#[test]
fn missing_age_is_invalid_input() {
    let err = AssessmentRequest::from_json(&json!({ "loc": 1 })).unwrap_err();
    assert_eq!(invalid_field(err), "patient_age");
}

#[test]
fn age_out_of_bounds_is_invalid_input() {
    for age in [0, 131, -4] {
        let err = AssessmentRequest::from_json(&json!({ "patient_age": age })).unwrap_err();
        assert_eq!(invalid_field(err), "patient_age");
    }
}

#[test]
fn unknown_keys_are_ignored() {
    let req = AssessmentRequest::from_json(&json!({
        "patient_age": 40,
        "blood_pressure": "140/90",
    }))
    .unwrap();
    assert_eq!(req.scores.total(), 0);
    assert!(req.raw_scores.is_empty());
}

#[test]
fn non_object_payload_is_invalid_input() {
    let err = AssessmentRequest::from_json(&json!([1, 2, 3])).unwrap_err();
    assert_eq!(invalid_field(err), "payload");
}

#[test]
fn malformed_json_text_is_a_serialization_error() {
    let err = AssessmentRequest::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn deserializing_applies_the_same_validation() {
    let err = serde_json::from_str::<AssessmentRequest>(r#"{"patient_age": 0, "motor_arm_left": 4}"#)
        .unwrap_err();
    assert!(err.to_string().contains("patient_age"));

    let nested = serde_json::from_str::<AssessmentRequest>(
        r#"{"patient": {"age": 50}, "scores": {"motor_arm_left": 4}}"#,
    );
    assert!(nested.is_err());
}

#[test]
fn deserialized_request_keeps_raw_scores_for_strict_checks() {
    let req: AssessmentRequest =
        serde_json::from_str(r#"{"patient_age": 70, "motor_arm_left": 6}"#).unwrap();
    assert_eq!(req.patient.age, 70);
    assert_eq!(req.scores.get(ScoreItem::MotorArmLeft), 4);
    assert_eq!(req.raw_scores, vec![(ScoreItem::MotorArmLeft, 6)]);
}
