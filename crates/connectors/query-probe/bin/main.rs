use std::sync::Arc;

use lambda_runtime::{service_fn, LambdaEvent};
use tokio::sync::OnceCell;

use query_probe::{create_state, ProbeRequest, ProbeResponse, QueryProbe, State};
use query_probe_configuration::ProbeConfiguration;

/// Shared by every invocation handled by this process.
static STATE: OnceCell<State> = OnceCell::const_new();

#[tokio::main]
pub async fn main() -> Result<(), lambda_runtime::Error> {
    query_probe::logging::init_tracing(false);

    let configuration = Arc::new(ProbeConfiguration::from_env()?);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let configuration = Arc::clone(&configuration);
        async move { handle(&configuration, event).await }
    }))
    .await
}

async fn handle(
    configuration: &ProbeConfiguration,
    event: LambdaEvent<serde_json::Value>,
) -> Result<ProbeResponse, lambda_runtime::Error> {
    let state = STATE
        .get_or_init(|| create_state(configuration.clone()))
        .await;

    tracing::info!(request_id = %event.context.request_id, "Invocation received");
    let request = ProbeRequest::from_event(event.payload).inspect_err(log_fatal)?;
    let result = QueryProbe::new(state)
        .run(&request)
        .await
        .inspect_err(log_fatal)?;

    Ok(ProbeResponse::from(&result))
}

fn log_fatal(error: &query_probe::ProbeError) {
    tracing::error!(error = %error, "Invocation failed");
}
