/*---------- Imports ----------*/
use dog_breed_classifier::{
    handlers::classify::Classifier,
    models::event::OutboundResult,
    utils::{endpoint::SageMakerEndpoint, settings::Settings},
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .init();

    let settings = Settings::from_env()?;
    let config = aws_config::load_from_env().await;
    let sagemaker_client = aws_sdk_sagemakerruntime::Client::new(&config);
    let endpoint = SageMakerEndpoint::new(sagemaker_client, &settings.endpoint_name);
    let classifier = Classifier::new(endpoint, settings.error_mode);

    info!(
        "Classifying with endpoint {} ({:?} errors)",
        settings.endpoint_name, settings.error_mode
    );

    let handler = service_fn(|event| handler_fn(&classifier, event));

    lambda_runtime::run(handler).await?;

    Ok(())
}

async fn handler_fn(
    classifier: &Classifier<SageMakerEndpoint>,
    event: LambdaEvent<Value>,
) -> Result<OutboundResult, Error> {
    let result = classifier.respond(&event.payload).await?;

    Ok(result)
}
