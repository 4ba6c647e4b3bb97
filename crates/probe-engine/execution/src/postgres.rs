//! PostgreSQL connections.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection as _;

use query_probe_configuration::Credentials;

use crate::database::{Connection, Database};
use crate::error::{ConnectionError, QueryError};

const APPLICATION_NAME: &str = "query-probe";

/// PostgreSQL, reached with a single unpooled connection per probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

#[async_trait]
impl Database for Postgres {
    async fn connect(
        &self,
        credentials: &Credentials,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        let options = PgConnectOptions::new()
            .host(&credentials.host)
            .port(credentials.port)
            .username(&credentials.username)
            .password(credentials.password.expose())
            .database(&credentials.database)
            .application_name(APPLICATION_NAME);

        let connection = PgConnection::connect_with(&options)
            .await
            .map_err(ConnectionError::driver)?;

        Ok(Box::new(PostgresConnection { connection }))
    }
}

struct PostgresConnection {
    connection: PgConnection,
}

#[async_trait]
impl Connection for PostgresConnection {
    async fn execute(&mut self, sql: &str) -> Result<usize, QueryError> {
        // A plain string without arguments goes over the simple query protocol.
        let rows = sqlx::Executor::fetch_all(&mut self.connection, sql)
            .await
            .map_err(QueryError::driver)?;
        tracing::debug!(rows = rows.len(), "Rows returned");
        Ok(rows.len())
    }

    async fn close(self: Box<Self>) -> Result<(), ConnectionError> {
        self.connection
            .close()
            .await
            .map_err(ConnectionError::driver)
    }
}
