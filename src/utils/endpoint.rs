/*---------- Imports ----------*/
use crate::models::inference::InferenceRequest;
use aws_sdk_sagemakerruntime::types::Blob;
use lambda_runtime::Error;
use std::future::Future;

/// Anything that can run one inference call and hand back the raw payload.
pub trait InferenceEndpoint {
    fn invoke(
        &self,
        request: &InferenceRequest,
    ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}

/*---------- Structs ----------*/
pub struct SageMakerEndpoint {
    client: aws_sdk_sagemakerruntime::Client,
    endpoint_name: String,
}

impl SageMakerEndpoint {
    pub fn new(client: aws_sdk_sagemakerruntime::Client, endpoint_name: &str) -> Self {
        SageMakerEndpoint {
            client,
            endpoint_name: endpoint_name.to_owned(),
        }
    }

    pub fn endpoint_name(&self) -> &str {
        &self.endpoint_name
    }
}

impl InferenceEndpoint for SageMakerEndpoint {
    async fn invoke(&self, request: &InferenceRequest) -> Result<Vec<u8>, Error> {
        let invoke_output = self
            .client
            .invoke_endpoint()
            .endpoint_name(&self.endpoint_name)
            .content_type(request.content_type)
            .body(Blob::new(request.payload.as_bytes().to_vec()))
            .send()
            .await?;

        let payload = match invoke_output.body() {
            Some(body) => body.as_ref().to_vec(),
            None => Vec::new(),
        };

        Ok(payload)
    }
}
