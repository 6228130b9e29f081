/*---------- Imports ----------*/
use crate::models::{breed::DogBreed, error::ClassifyError, event::OutboundResult};
use serde_json::json;

pub struct HttpResponse;

impl HttpResponse {
    pub fn build_success_response(breed: DogBreed) -> OutboundResult {
        OutboundResult {
            status_code: 200,
            body: json!(breed.label()).to_string(),
        }
    }

    pub fn build_error_response(error: &ClassifyError) -> OutboundResult {
        OutboundResult {
            status_code: error.status_code(),
            body: json!({ "message": error.to_string() }).to_string(),
        }
    }
}
