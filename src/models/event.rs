/*---------- Imports ----------*/
use crate::models::error::ClassifyError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/*---------- Structs ----------*/
/// Invocation event as delivered by the trigger. Only `body` is read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InboundEvent {
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AreaPayload {
    pub area: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutboundResult {
    pub status_code: u16,
    pub body: String,
}

impl InboundEvent {
    pub fn from_value(event: &Value) -> Result<Self, ClassifyError> {
        match event.get("body").and_then(Value::as_str) {
            Some(body) => Ok(InboundEvent {
                body: body.to_owned(),
            }),
            None => Err(ClassifyError::MissingBody),
        }
    }

    pub fn area_payload(&self) -> Result<AreaPayload, ClassifyError> {
        let parsed_body: Value =
            serde_json::from_str(&self.body).map_err(ClassifyError::MalformedBody)?;

        let area = match parsed_body.as_object().and_then(|body| body.get("area")) {
            Some(area) => area,
            None => return Err(ClassifyError::MissingArea),
        };

        match area.as_str() {
            Some(value) => Ok(AreaPayload {
                area: value.to_owned(),
            }),
            None => Err(ClassifyError::InvalidArea),
        }
    }
}
