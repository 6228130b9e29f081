/*---------- Imports ----------*/
use crate::models::error::ClassifyError;
use serde_json::Value;

/*---------- Constants ----------*/
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/*---------- Structs ----------*/
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub payload: String,
    pub content_type: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferenceResponse {
    pub class_id: i64,
}

impl InferenceRequest {
    pub fn csv(payload: &str) -> Self {
        InferenceRequest {
            payload: payload.to_owned(),
            content_type: CSV_CONTENT_TYPE,
        }
    }
}

impl InferenceResponse {
    /// Decodes the endpoint payload, a JSON scalar such as `0`, `1.0` or `"1"`.
    pub fn from_payload(payload: &[u8]) -> Result<Self, ClassifyError> {
        let raw = match std::str::from_utf8(payload) {
            Ok(raw) => raw,
            Err(_) => {
                let lossy = String::from_utf8_lossy(payload).into_owned();
                return Err(ClassifyError::MalformedPrediction(lossy));
            }
        };

        let prediction: Value = serde_json::from_str(raw)
            .map_err(|_| ClassifyError::MalformedPrediction(raw.to_owned()))?;

        Self::from_prediction(&prediction)
    }

    pub fn from_prediction(prediction: &Value) -> Result<Self, ClassifyError> {
        let class_id = match prediction {
            Value::Number(number) => match number.as_i64() {
                Some(class_id) => Some(class_id),
                None => number
                    .as_f64()
                    .filter(|value| value.is_finite())
                    .map(|value| value.trunc() as i64),
            },
            Value::String(text) => text.trim().parse::<i64>().ok(),
            _ => None,
        };

        match class_id {
            Some(class_id) => Ok(InferenceResponse { class_id }),
            None => Err(ClassifyError::MalformedPrediction(prediction.to_string())),
        }
    }
}
