use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;

use super::item::ScoreItem;
use super::score_set::ScoreSet;

pub const MIN_PATIENT_AGE: u8 = 1;
pub const MAX_PATIENT_AGE: u8 = 130;

/// Patient details that accompany an assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientContext {
    pub age: u8,
    pub notes: String,
}

/// A coerced assessment payload, ready for scoring.
///
/// Deserializing goes through [`AssessmentRequest::from_json`], so the flat
/// payload shape and its validation apply there too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct AssessmentRequest {
    pub patient: PatientContext,
    pub scores: ScoreSet,
    /// Item values exactly as submitted, before clamping. Only items present
    /// in the payload appear here.
    pub raw_scores: Vec<(ScoreItem, i64)>,
}

impl AssessmentRequest {
    /// Parse a JSON document in the flat create-payload shape.
    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json(&value)
    }

    /// Coerce a flat payload: `patient_age`, optional `patient_notes`, and any
    /// of the 15 item keys at the top level.
    ///
    /// Score values may be JSON integers or strings holding an integer.
    /// Anything else is `InvalidInput`. Range problems are not errors here;
    /// the score set clamps them. Unknown keys are ignored.
    pub fn from_json(payload: &Value) -> Result<Self, CoreError> {
        let obj = payload
            .as_object()
            .ok_or_else(|| CoreError::invalid("payload", "expected a JSON object"))?;

        let age = match obj.get("patient_age") {
            None | Some(Value::Null) => {
                return Err(CoreError::invalid("patient_age", "this field is required"));
            }
            Some(v) => coerce_integer("patient_age", v)?,
        };
        if age < i64::from(MIN_PATIENT_AGE) || age > i64::from(MAX_PATIENT_AGE) {
            return Err(CoreError::invalid(
                "patient_age",
                format!("age must be between {MIN_PATIENT_AGE} and {MAX_PATIENT_AGE}, got {age}"),
            ));
        }

        let notes = match obj.get("patient_notes") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(CoreError::invalid(
                    "patient_notes",
                    format!("expected a string, got {other}"),
                ));
            }
        };

        let mut scores = ScoreSet::new();
        let mut raw_scores = Vec::new();
        for item in ScoreItem::ALL {
            let Some(value) = obj.get(item.key()) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            let raw = coerce_integer(item.key(), value)?;
            scores.set(item, raw);
            raw_scores.push((item, raw));
        }

        Ok(AssessmentRequest {
            patient: PatientContext {
                // Range-checked above.
                age: age as u8,
                notes,
            },
            scores,
            raw_scores,
        })
    }
}

impl TryFrom<Value> for AssessmentRequest {
    type Error = CoreError;

    fn try_from(payload: Value) -> Result<Self, Self::Error> {
        Self::from_json(&payload)
    }
}

pub(crate) fn coerce_integer(field: &str, value: &Value) -> Result<i64, CoreError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if n.as_u64().is_some() {
                // Larger than i64::MAX; clamping brings it back in range.
                Ok(i64::MAX)
            } else if let Some(f) = n.as_f64()
                && f.fract() == 0.0
                && f >= i64::MIN as f64
                && f <= i64::MAX as f64
            {
                Ok(f as i64)
            } else {
                Err(CoreError::invalid(field, format!("expected an integer, got {n}")))
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::invalid(field, format!("expected an integer, got \"{s}\""))),
        other => Err(CoreError::invalid(
            field,
            format!("expected an integer, got {other}"),
        )),
    }
}
