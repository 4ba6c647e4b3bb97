//! Resolution of database credentials from a secrets store.

pub mod aws;
pub mod environment;
pub mod error;

use async_trait::async_trait;
use tracing::{info_span, Instrument};

use query_probe_configuration::Credentials;

pub use aws::AwsSecretsManager;
pub use environment::EnvironmentSecretStore;
pub use error::SecretResolutionError;

/// A store that maps a secret identifier to the secret's string value.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the raw string value of a secret.
    async fn fetch_secret_string(&self, secret_id: &str) -> Result<String, SecretResolutionError>;

    /// Fetch a secret and interpret it as database credentials.
    async fn get_credentials(&self, secret_id: &str) -> Result<Credentials, SecretResolutionError> {
        let secret = self
            .fetch_secret_string(secret_id)
            .instrument(info_span!("Fetch secret", secret_id))
            .await?;

        Credentials::from_secret_string(&secret).map_err(|error| {
            SecretResolutionError::Malformed {
                secret_id: secret_id.to_string(),
                reason: error.to_string(),
            }
        })
    }
}
