//! Metric points emitted by the probe, and the sinks that ingest them.

pub mod cloudwatch;
pub mod error;
pub mod metric;
pub mod prometheus_sink;

use async_trait::async_trait;

pub use cloudwatch::CloudWatchSink;
pub use error::IngestionError;
pub use metric::{MetricName, MetricPoint, MetricUnit};
pub use prometheus_sink::PrometheusSink;

/// A monitoring backend that accepts one metric point at a time.
#[async_trait]
pub trait MetricSink: Send + Sync {
    async fn put_metric(&self, point: &MetricPoint) -> Result<(), IngestionError>;
}
