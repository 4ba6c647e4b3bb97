//! The invocation payload.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

/// What to run, what to call it, and where to find the database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ProbeRequest {
    /// The statement to execute.
    pub sql: String,
    /// Reported as the `QueryName` dimension of every metric.
    pub query_name: String,
    /// Identifier of the secret holding the database credentials.
    pub db_secret: String,
}

impl ProbeRequest {
    /// Read a request from a raw invocation event.
    ///
    /// Only the shape is checked here; [`QueryProbe::run`](crate::QueryProbe::run) validates the
    /// field values.
    pub fn from_event(event: serde_json::Value) -> Result<Self, ProbeError> {
        serde_json::from_value(event).map_err(|error| ProbeError::InvalidRequest(error.to_string()))
    }

    /// Reject requests with blank fields.
    pub fn validate(&self) -> Result<(), ProbeError> {
        for (field, value) in [
            ("sql", &self.sql),
            ("query_name", &self.query_name),
            ("db_secret", &self.db_secret),
        ] {
            if value.trim().is_empty() {
                return Err(ProbeError::InvalidRequest(format!("`{field}` must not be blank")));
            }
        }
        Ok(())
    }
}
