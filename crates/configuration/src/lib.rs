pub mod configuration;
pub mod connection_settings;
pub mod environment;
pub mod error;
pub mod values;

pub use configuration::ProbeConfiguration;
pub use connection_settings::DatabaseConnectionSettings;
pub use error::CredentialsError;
pub use values::{Credentials, DatabaseEngine, Password};
