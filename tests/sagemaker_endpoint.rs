use aws_smithy_client::test_connection::TestConnection;
use aws_smithy_http::body::SdkBody;
use aws_smithy_types::retry::RetryConfig;
use aws_types::{region::Region, Credentials};
use dog_breed_classifier::{
    handlers::classify::Classifier,
    models::inference::InferenceRequest,
    utils::{
        endpoint::{InferenceEndpoint, SageMakerEndpoint},
        settings::ErrorMode,
    },
};
use serde_json::json;

const ENDPOINT_NAME: &str = "dog-breed-endpoint";

fn invocation_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .uri(format!(
            "https://runtime.sagemaker.us-east-1.amazonaws.com/endpoints/{}/invocations",
            ENDPOINT_NAME
        ))
        .header("content-type", "text/csv")
        .body(SdkBody::from("1500"))
        .unwrap()
}

fn test_endpoint(status: u16, response_body: &'static str) -> (SageMakerEndpoint, TestConnection<SdkBody>) {
    let connection = TestConnection::new(vec![(
        invocation_request(),
        http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(SdkBody::from(response_body))
            .unwrap(),
    )]);

    let config = aws_sdk_sagemakerruntime::Config::builder()
        .credentials_provider(Credentials::from_keys("ATESTCLIENT", "astestsecretkey", None))
        .region(Region::new("us-east-1"))
        .retry_config(RetryConfig::disabled())
        .build();

    let client = aws_sdk_sagemakerruntime::Client::from_conf_conn(config, connection.clone());

    (SageMakerEndpoint::new(client, ENDPOINT_NAME), connection)
}

#[tokio::test]
async fn sends_area_to_named_endpoint() {
    let (endpoint, connection) = test_endpoint(200, "1");

    let payload = endpoint
        .invoke(&InferenceRequest::csv("1500"))
        .await
        .unwrap();

    assert_eq!(payload, b"1".to_vec());
    assert_eq!(endpoint.endpoint_name(), ENDPOINT_NAME);

    let requests = connection.requests();
    assert_eq!(requests.len(), 1);

    let actual = &requests[0].actual;
    assert_eq!(
        actual.uri().path(),
        format!("/endpoints/{}/invocations", ENDPOINT_NAME)
    );
    assert_eq!(actual.headers().get("content-type").unwrap(), "text/csv");
    assert_eq!(actual.body().bytes(), Some("1500".as_bytes()));
}

#[tokio::test]
async fn classifies_through_sagemaker_client() {
    let (endpoint, _connection) = test_endpoint(200, "0");
    let classifier = Classifier::new(endpoint, ErrorMode::Propagate);

    let result = classifier
        .handle(&json!({"body": "{\"area\": \"1500\"}"}))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"statusCode": 200, "body": "\"beagle\""})
    );
}

#[tokio::test]
async fn surfaces_model_errors() {
    let (endpoint, _connection) = test_endpoint(
        424,
        r#"{"ErrorCode": "CLIENT_ERROR_FROM_MODEL", "Message": "Received client error (400) from model"}"#,
    );

    let result = endpoint.invoke(&InferenceRequest::csv("1500")).await;

    assert!(result.is_err());
}
