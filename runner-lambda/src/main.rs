use greeting_core::telemetry::init_tracing_for_lambda;
use greeting_core::{GreetingHandler, GreetingResponse, load_config};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

/// Entry point for the AWS Lambda custom runtime.
///
/// Configuration is read once per cold start from `GREETING_CONFIG`; the
/// same handler then serves every invocation of the execution environment.
#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing_for_lambda();

    let config = load_config(None)?;
    tracing::info!(?config, "greeting function starting");
    let handler = GreetingHandler::new(config);
    let handler = &handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        lambda_handler(handler, event).await
    }))
    .await
}

pub async fn lambda_handler(
    handler: &GreetingHandler,
    event: LambdaEvent<Value>,
) -> Result<GreetingResponse, Error> {
    let (payload, context) = event.into_parts();

    match handler.handle(&payload) {
        Ok(response) => {
            tracing::info!(request_id = %context.request_id, "greeting sent");
            Ok(response)
        }
        Err(e) => {
            tracing::warn!(
                request_id = %context.request_id,
                caller_error = e.is_caller_error(),
                "invocation failed: {e}"
            );
            Err(e.into())
        }
    }
}
