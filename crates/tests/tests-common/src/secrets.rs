//! A secrets store backed by a map.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use probe_engine_secrets::{SecretResolutionError, SecretStore};

pub const HEALTH_DB_SECRET_ID: &str =
    "arn:aws:secretsmanager:us-east-1:123456789012:secret:prod/sqlserver/health-db";

pub const HEALTH_DB_SECRET: &str = r#"{
    "username": "probe",
    "password": "correct-horse-battery-staple",
    "host": "health-db.cluster.internal",
    "database": "health",
    "port": 1433
}"#;

pub const NO_HOST_SECRET_ID: &str = "prod/sqlserver/no-host";

pub const NO_HOST_SECRET: &str = r#"{
    "username": "probe",
    "password": "correct-horse-battery-staple",
    "database": "health"
}"#;

#[derive(Debug, Default)]
pub struct StaticSecretStore {
    secrets: HashMap<String, String>,
    denied: HashSet<String>,
    lookups: AtomicUsize,
}

impl StaticSecretStore {
    /// A store holding the health database secret and a secret without a host.
    pub fn with_fixtures() -> Self {
        Self::default()
            .with_secret(HEALTH_DB_SECRET_ID, HEALTH_DB_SECRET)
            .with_secret(NO_HOST_SECRET_ID, NO_HOST_SECRET)
    }

    #[must_use]
    pub fn with_secret(mut self, secret_id: &str, value: &str) -> Self {
        self.secrets.insert(secret_id.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_denied(mut self, secret_id: &str) -> Self {
        self.denied.insert(secret_id.to_string());
        self
    }

    /// How many times a secret was asked for.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretStore for StaticSecretStore {
    async fn fetch_secret_string(&self, secret_id: &str) -> Result<String, SecretResolutionError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if self.denied.contains(secret_id) {
            return Err(SecretResolutionError::AccessDenied {
                secret_id: secret_id.to_string(),
                message: "not authorized to perform secretsmanager:GetSecretValue".to_string(),
            });
        }

        self.secrets
            .get(secret_id)
            .cloned()
            .ok_or_else(|| SecretResolutionError::NotFound {
                secret_id: secret_id.to_string(),
            })
    }
}
