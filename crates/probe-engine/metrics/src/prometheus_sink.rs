//! Metrics kept in a Prometheus registry, for running the probe outside of a function.

use async_trait::async_trait;
use prometheus::GaugeVec;

use crate::error::IngestionError;
use crate::metric::{MetricName, MetricPoint};
use crate::MetricSink;

const LABELS: [&str; 2] = ["namespace", "query_name"];

#[derive(Debug, Clone)]
pub struct PrometheusSink {
    pub response_time: GaugeVec,
    pub response_status: GaugeVec,
    pub connection_time: GaugeVec,
}

/// Create a new gauge metric, labelled by namespace and query name, and register it with the
/// provided Prometheus Registry
fn add_gauge_vec_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GaugeVec, prometheus::Error> {
    let gauge = GaugeVec::new(prometheus::Opts::new(metric_name, metric_description), &LABELS)?;

    metrics_registry.register(Box::new(gauge.clone()))?;

    Ok(gauge)
}

impl PrometheusSink {
    /// Setup the gauges used to produce Prometheus metrics
    pub fn initialize(metrics_registry: &mut prometheus::Registry) -> Result<Self, prometheus::Error> {
        let response_time = add_gauge_vec_metric(
            metrics_registry,
            "query_probe_response_time_seconds",
            "Time spent executing the probe query, in seconds.",
        )?;

        let response_status = add_gauge_vec_metric(
            metrics_registry,
            "query_probe_response_status",
            "Status of the last probe: 200 on success, 500 on failure.",
        )?;

        let connection_time = add_gauge_vec_metric(
            metrics_registry,
            "query_probe_connection_time_seconds",
            "Time spent connecting to the database, in seconds.",
        )?;

        Ok(PrometheusSink {
            response_time,
            response_status,
            connection_time,
        })
    }

    fn gauge(&self, name: MetricName) -> &GaugeVec {
        match name {
            MetricName::QueryResponseTime => &self.response_time,
            MetricName::QueryResponseStatus => &self.response_status,
            MetricName::QueryConnectionTime => &self.connection_time,
        }
    }
}

#[async_trait]
impl MetricSink for PrometheusSink {
    async fn put_metric(&self, point: &MetricPoint) -> Result<(), IngestionError> {
        self.gauge(point.name)
            .get_metric_with_label_values(&[point.namespace.as_str(), point.dimension.as_str()])
            .map_err(|error| IngestionError::Rejected {
                metric: point.name,
                namespace: point.namespace.clone(),
                message: error.to_string(),
            })?
            .set(point.value);
        Ok(())
    }
}
