//! Transient state used by the probe.
//!
//! This is initialized once per process and shared by every invocation.

use std::sync::Arc;

use tracing::{info_span, Instrument};

use probe_engine_execution::{Database, EngineDatabase};
use probe_engine_metrics::{CloudWatchSink, MetricSink};
use probe_engine_secrets::{AwsSecretsManager, SecretStore};
use query_probe_configuration::ProbeConfiguration;

/// State for our probe.
#[derive(Clone)]
pub struct State {
    pub configuration: ProbeConfiguration,
    pub secrets: Arc<dyn SecretStore>,
    pub database: Arc<dyn Database>,
    pub metrics: Arc<dyn MetricSink>,
}

impl State {
    pub fn new(
        configuration: ProbeConfiguration,
        secrets: Arc<dyn SecretStore>,
        database: Arc<dyn Database>,
        metrics: Arc<dyn MetricSink>,
    ) -> Self {
        State {
            configuration,
            secrets,
            database,
            metrics,
        }
    }
}

/// Load the AWS SDK configuration, using the configured region if there is one and the SDK's
/// default chain otherwise.
pub async fn load_sdk_config(configuration: &ProbeConfiguration) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = &configuration.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    loader
        .load()
        .instrument(info_span!("Load AWS configuration"))
        .await
}

/// Create the AWS clients and the database drivers and wrap them inside a probe State.
pub async fn create_state(configuration: ProbeConfiguration) -> State {
    let sdk_config = load_sdk_config(&configuration).await;
    let database = EngineDatabase::new(&configuration.connection_settings);

    State::new(
        configuration,
        Arc::new(AwsSecretsManager::new(&sdk_config)),
        Arc::new(database),
        Arc::new(CloudWatchSink::new(&sdk_config)),
    )
}
