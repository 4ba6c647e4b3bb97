//! The database seam: something that can be connected to, and a connection that runs SQL.

use async_trait::async_trait;

use query_probe_configuration::{Credentials, DatabaseConnectionSettings, DatabaseEngine};

use crate::error::{ConnectionError, QueryError};
use crate::postgres::Postgres;
use crate::sqlserver::SqlServer;

/// A database that can be connected to using resolved credentials.
#[async_trait]
pub trait Database: Send + Sync {
    async fn connect(
        &self,
        credentials: &Credentials,
    ) -> Result<Box<dyn Connection>, ConnectionError>;
}

/// A single open connection.
#[async_trait]
pub trait Connection: Send {
    /// Run `sql` as a single batch and drain every result set, returning the number of rows read.
    async fn execute(&mut self, sql: &str) -> Result<usize, QueryError>;

    /// Close the connection, telling the server we are going away.
    async fn close(self: Box<Self>) -> Result<(), ConnectionError>;
}

/// Dispatches to the driver matching the engine recorded in the credentials.
#[derive(Debug, Clone)]
pub struct EngineDatabase {
    sql_server: SqlServer,
    postgres: Postgres,
}

impl EngineDatabase {
    pub fn new(settings: &DatabaseConnectionSettings) -> Self {
        Self {
            sql_server: SqlServer::new(settings.encrypt),
            postgres: Postgres,
        }
    }
}

#[async_trait]
impl Database for EngineDatabase {
    async fn connect(
        &self,
        credentials: &Credentials,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        match credentials.engine {
            DatabaseEngine::SqlServer => self.sql_server.connect(credentials).await,
            DatabaseEngine::Postgres => self.postgres.connect(credentials).await,
        }
    }
}
