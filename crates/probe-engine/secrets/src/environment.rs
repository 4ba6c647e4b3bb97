//! Secrets read from environment variables.
//!
//! Useful when running the probe locally: the secret identifier names an environment variable
//! whose value is the same JSON document that would be stored in the secrets store.

use async_trait::async_trait;

use query_probe_configuration::environment::{self, Environment, Variable};

use crate::error::SecretResolutionError;
use crate::SecretStore;

#[derive(Debug, Clone)]
pub struct EnvironmentSecretStore<Env> {
    environment: Env,
}

impl<Env: Environment> EnvironmentSecretStore<Env> {
    pub fn new(environment: Env) -> Self {
        Self { environment }
    }
}

#[async_trait]
impl<Env: Environment + Send + Sync> SecretStore for EnvironmentSecretStore<Env> {
    async fn fetch_secret_string(&self, secret_id: &str) -> Result<String, SecretResolutionError> {
        let variable = Variable::from(secret_id);
        self.environment
            .read(&variable)
            .map_err(|error| match error {
                environment::Error::NonExistentVariable(_) => SecretResolutionError::NotFound {
                    secret_id: secret_id.to_string(),
                },
                environment::Error::NonUnicodeValue(_) => SecretResolutionError::Malformed {
                    secret_id: secret_id.to_string(),
                    reason: error.to_string(),
                },
            })
    }
}
