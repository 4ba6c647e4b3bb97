use serde::Deserialize;

use super::{DatabaseEngine, Password};
use crate::error::CredentialsError;

/// Everything needed to open a connection to the target database.
///
/// Resolved from the secrets store on every invocation and dropped at the end of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Password,
    pub host: String,
    pub database: String,
    pub port: u16,
    pub engine: DatabaseEngine,
}

/// The JSON document stored in the secret, before validation.
#[derive(Debug, Deserialize)]
struct SecretDocument {
    username: Option<String>,
    password: Option<String>,
    host: Option<String>,
    database: Option<String>,
    dbname: Option<String>,
    #[serde(default)]
    port: Option<serde_json::Value>,
    engine: Option<String>,
}

impl Credentials {
    /// Parse the string value of a secret.
    ///
    /// `port` may be a number or a numeric string. When it is absent or cannot be read as a TCP
    /// port the engine's default port is used.
    pub fn from_secret_string(secret: &str) -> Result<Self, CredentialsError> {
        let document: SecretDocument = serde_json::from_str(secret)?;

        let engine = match document.engine.as_deref() {
            None => DatabaseEngine::default(),
            Some(engine) => engine.parse()?,
        };

        Ok(Credentials {
            username: required("username", document.username)?,
            password: required("password", document.password)?.into(),
            host: required("host", document.host)?,
            database: required("database", document.database.or(document.dbname))?,
            port: parse_port(document.port.as_ref()).unwrap_or_else(|| engine.default_port()),
            engine,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, CredentialsError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CredentialsError::MissingField(field)),
    }
}

fn parse_port(value: Option<&serde_json::Value>) -> Option<u16> {
    let port = match value? {
        serde_json::Value::Number(number) => number.as_u64().and_then(|n| u16::try_from(n).ok()),
        serde_json::Value::String(string) => string.trim().parse::<u16>().ok(),
        _ => None,
    }?;
    (port != 0).then_some(port)
}
