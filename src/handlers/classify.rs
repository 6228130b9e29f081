/*---------- Imports ----------*/
use crate::{
    models::{
        breed::DogBreed,
        error::ClassifyError,
        event::{InboundEvent, OutboundResult},
        inference::{InferenceRequest, InferenceResponse},
    },
    utils::{endpoint::InferenceEndpoint, http::HttpResponse, settings::ErrorMode},
};
use serde_json::Value;
use tracing::{info, warn};

/// Turns an `{"body": "{\"area\": ...}"}` event into a breed label using one endpoint call.
pub struct Classifier<E> {
    endpoint: E,
    error_mode: ErrorMode,
}

impl<E: InferenceEndpoint> Classifier<E> {
    pub fn new(endpoint: E, error_mode: ErrorMode) -> Self {
        Classifier {
            endpoint,
            error_mode,
        }
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub async fn classify(&self, event: &Value) -> Result<DogBreed, ClassifyError> {
        let area_payload = InboundEvent::from_value(event)?.area_payload()?;
        let request = InferenceRequest::csv(&area_payload.area);

        let payload = self
            .endpoint
            .invoke(&request)
            .await
            .map_err(ClassifyError::Endpoint)?;

        info!(
            "Endpoint response: {}",
            String::from_utf8_lossy(&payload).trim()
        );

        let response = InferenceResponse::from_payload(&payload)?;

        DogBreed::try_from(response.class_id)
    }

    pub async fn handle(&self, event: &Value) -> Result<OutboundResult, ClassifyError> {
        let breed = self.classify(event).await?;

        Ok(HttpResponse::build_success_response(breed))
    }

    pub async fn handle_strict(&self, event: &Value) -> OutboundResult {
        match self.handle(event).await {
            Ok(result) => result,
            Err(error) => {
                warn!("Classification failed: {}", error);

                HttpResponse::build_error_response(&error)
            }
        }
    }

    pub async fn respond(&self, event: &Value) -> Result<OutboundResult, ClassifyError> {
        match self.error_mode {
            ErrorMode::Propagate => self.handle(event).await,
            ErrorMode::Strict => Ok(self.handle_strict(event).await),
        }
    }
}
