//! Errors that end an invocation without a probe result.

use thiserror::Error;

use probe_engine_metrics::IngestionError;
use probe_engine_secrets::SecretResolutionError;

/// A fatal error. Database failures are not among them: those become a 500 status.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("unable to resolve database credentials: {0}")]
    SecretResolution(#[from] SecretResolutionError),
    #[error("unable to publish metrics: {0}")]
    MetricIngestion(#[from] IngestionError),
}
