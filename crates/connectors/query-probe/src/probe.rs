//! Run one probe: resolve credentials, time the statement, publish the timings.

use tracing::{info_span, Instrument};

use probe_engine_execution::measure;
use probe_engine_metrics::{MetricName, MetricPoint, MetricSink};

use crate::error::ProbeError;
use crate::request::ProbeRequest;
use crate::state::State;

/// Whether the statement ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    Success,
    Failure,
}

impl ProbeStatus {
    /// The status code reported in the response and as the status metric.
    pub fn code(self) -> u16 {
        match self {
            ProbeStatus::Success => 200,
            ProbeStatus::Failure => 500,
        }
    }
}

/// The outcome of a probe that reached the metrics stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub status: ProbeStatus,
    /// Seconds, zero when the connection failed.
    pub connection_time: f64,
    /// Seconds, zero when the connection or the statement failed.
    pub response_time: f64,
}

impl ProbeResult {
    pub fn message(&self) -> String {
        match self.status {
            ProbeStatus::Success => {
                format!("SQL query executed in {:.2} seconds", self.response_time)
            }
            ProbeStatus::Failure => {
                format!("SQL query failed in {:.2} seconds", self.response_time)
            }
        }
    }

    fn value_of(&self, name: MetricName) -> f64 {
        match name {
            MetricName::QueryResponseTime => self.response_time,
            MetricName::QueryResponseStatus => f64::from(self.status.code()),
            MetricName::QueryConnectionTime => self.connection_time,
        }
    }
}

/// Probes the databases reachable through a [`State`].
#[derive(Clone, Copy)]
pub struct QueryProbe<'a> {
    state: &'a State,
}

impl<'a> QueryProbe<'a> {
    pub fn new(state: &'a State) -> Self {
        QueryProbe { state }
    }

    /// Run the request once.
    ///
    /// Database failures are reported through the result's status. Only an invalid request, a
    /// secret that cannot be resolved or a metric that cannot be published end the run with an
    /// error; no metrics are published in the first two cases.
    pub async fn run(&self, request: &ProbeRequest) -> Result<ProbeResult, ProbeError> {
        request.validate()?;
        tracing::info!(query_name = %request.query_name, "Processing probe");

        let credentials = self
            .state
            .secrets
            .get_credentials(&request.db_secret)
            .instrument(info_span!("Resolve database credentials"))
            .await?;
        let namespace = credentials.database.clone();

        let measurement = measure(
            self.state.database.as_ref(),
            &credentials,
            &request.sql,
            &self.state.configuration.connection_settings,
        )
        .await;

        let status = match &measurement.outcome {
            Ok(_) => ProbeStatus::Success,
            Err(error) => {
                tracing::error!(
                    query_name = %request.query_name,
                    namespace = %namespace,
                    error = %error,
                    "Probe failed"
                );
                ProbeStatus::Failure
            }
        };

        let result = ProbeResult {
            status,
            connection_time: measurement.connection_time.as_secs_f64(),
            response_time: measurement.response_time.as_secs_f64(),
        };

        emit_metrics(
            self.state.metrics.as_ref(),
            &namespace,
            &request.query_name,
            &result,
        )
        .instrument(info_span!("Publish metrics", namespace = %namespace))
        .await?;

        tracing::info!(status = status.code(), message = %result.message(), "Probe complete");
        Ok(result)
    }
}

/// Publish one point per metric, in declaration order, stopping at the first failure.
async fn emit_metrics(
    sink: &dyn MetricSink,
    namespace: &str,
    query_name: &str,
    result: &ProbeResult,
) -> Result<(), ProbeError> {
    for name in enum_iterator::all::<MetricName>() {
        let point = MetricPoint {
            name,
            namespace: namespace.to_string(),
            dimension: query_name.to_string(),
            value: result.value_of(name),
        };
        sink.put_metric(&point).await?;
        tracing::debug!(metric = %name, value = point.value, "Metric published");
    }
    Ok(())
}
