use std::fmt;
use std::str::FromStr;

use crate::error::CredentialsError;

/// The kind of database a secret points at.
///
/// Secrets written for RDS carry an `engine` field; when it is missing we assume SQL Server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DatabaseEngine {
    #[default]
    SqlServer,
    Postgres,
}

impl DatabaseEngine {
    pub fn default_port(self) -> u16 {
        match self {
            DatabaseEngine::SqlServer => 1433,
            DatabaseEngine::Postgres => 5432,
        }
    }
}

impl FromStr for DatabaseEngine {
    type Err = CredentialsError;

    fn from_str(engine: &str) -> Result<Self, Self::Err> {
        let normalized = engine.trim().to_ascii_lowercase();
        match normalized.as_str() {
            // sqlserver-ee, sqlserver-se, sqlserver-ex, sqlserver-web
            name if name.starts_with("sqlserver") => Ok(DatabaseEngine::SqlServer),
            "mssql" => Ok(DatabaseEngine::SqlServer),
            "postgres" | "postgresql" | "aurora-postgresql" => Ok(DatabaseEngine::Postgres),
            _ => Err(CredentialsError::UnsupportedEngine(engine.to_string())),
        }
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseEngine::SqlServer => write!(f, "sqlserver"),
            DatabaseEngine::Postgres => write!(f, "postgres"),
        }
    }
}
