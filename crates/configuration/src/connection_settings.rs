//! Database connection settings.

use std::time::Duration;

pub const DEFAULT_CONNECT_TIMEOUT_VARIABLE: &str = "QUERY_PROBE_CONNECT_TIMEOUT_SECS";
pub const DEFAULT_QUERY_TIMEOUT_VARIABLE: &str = "QUERY_PROBE_QUERY_TIMEOUT_SECS";
pub const DEFAULT_ENCRYPT_VARIABLE: &str = "QUERY_PROBE_ENCRYPT";

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 30;

/// Database connection settings.
///
/// These bound how long a single invocation may block on the database.
#[derive(Clone, PartialEq, Eq, Debug, clap::Args)]
pub struct DatabaseConnectionSettings {
    /// Maximum time to spend establishing a connection, in seconds.
    #[arg(
        long = "connect-timeout-secs",
        env = DEFAULT_CONNECT_TIMEOUT_VARIABLE,
        default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub connect_timeout_secs: u64,

    /// Maximum time to spend executing the statement and reading its results, in seconds.
    #[arg(
        long = "query-timeout-secs",
        env = DEFAULT_QUERY_TIMEOUT_VARIABLE,
        default_value_t = DEFAULT_QUERY_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub query_timeout_secs: u64,

    /// Encrypt the whole SQL Server session rather than only the login.
    #[arg(
        long,
        env = DEFAULT_ENCRYPT_VARIABLE,
        default_value_t = false,
        action = clap::ArgAction::Set
    )]
    pub encrypt: bool,
}

impl DatabaseConnectionSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

impl Default for DatabaseConnectionSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            query_timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
            encrypt: false,
        }
    }
}
