//! AWS Secrets Manager integration.

use async_trait::async_trait;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;

use crate::error::SecretResolutionError;
use crate::SecretStore;

const ACCESS_DENIED_CODE: &str = "AccessDeniedException";

/// Secrets backed by AWS Secrets Manager.
///
/// The client is cheap to clone and safe to share between concurrent invocations.
#[derive(Debug, Clone)]
pub struct AwsSecretsManager {
    client: aws_sdk_secretsmanager::Client,
}

impl AwsSecretsManager {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_secretsmanager::Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl SecretStore for AwsSecretsManager {
    async fn fetch_secret_string(&self, secret_id: &str) -> Result<String, SecretResolutionError> {
        tracing::info!(secret_id, "Getting secret value");

        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|error| classify_error(secret_id, error))?;

        output
            .secret_string()
            .map(ToString::to_string)
            .ok_or_else(|| SecretResolutionError::Malformed {
                secret_id: secret_id.to_string(),
                reason: "secret has no string value".to_string(),
            })
    }
}

/// Map an SDK failure onto the secret resolution taxonomy.
fn classify_error(secret_id: &str, error: SdkError<GetSecretValueError>) -> SecretResolutionError {
    let message = DisplayErrorContext(&error).to_string();
    let secret_id = secret_id.to_string();
    let service_error = error.into_service_error();

    if service_error.is_resource_not_found_exception() {
        SecretResolutionError::NotFound { secret_id }
    } else if service_error.code() == Some(ACCESS_DENIED_CODE) {
        SecretResolutionError::AccessDenied { secret_id, message }
    } else {
        SecretResolutionError::Unavailable { secret_id, message }
    }
}
