//! Errors for metric ingestion.

use thiserror::Error;

use crate::metric::MetricName;

#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("{metric} was rejected for namespace '{namespace}': {message}")]
    Rejected {
        metric: MetricName,
        namespace: String,
        message: String,
    },
}
