//! Errors for secret resolution.

use thiserror::Error;

/// The secret could not be turned into credentials.
///
/// Every variant is fatal for an invocation: without credentials there is no database name, and
/// so no metric namespace to report under.
#[derive(Debug, Error)]
pub enum SecretResolutionError {
    #[error("secret '{secret_id}' was not found")]
    NotFound { secret_id: String },
    #[error("access to secret '{secret_id}' was denied: {message}")]
    AccessDenied { secret_id: String, message: String },
    #[error("secret '{secret_id}' is malformed: {reason}")]
    Malformed { secret_id: String, reason: String },
    #[error("unable to fetch secret '{secret_id}': {message}")]
    Unavailable { secret_id: String, message: String },
}
