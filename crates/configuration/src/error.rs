//! Errors that can be thrown when interpreting configuration values.

use thiserror::Error;

/// A secret payload could not be turned into database credentials.
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("secret is not a valid credentials document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
    #[error("secret has no '{0}' field")]
    MissingField(&'static str),
    #[error("unsupported database engine '{0}'")]
    UnsupportedEngine(String),
}
