//! SQL Server connections over TDS.

use async_trait::async_trait;
use tiberius::{AuthMethod, Client, Config, EncryptionLevel};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use query_probe_configuration::Credentials;

use crate::database::{Connection, Database};
use crate::error::{ConnectionError, QueryError};

const APPLICATION_NAME: &str = "query-probe";

#[derive(Debug, Clone)]
pub struct SqlServer {
    encrypt: bool,
}

impl SqlServer {
    pub fn new(encrypt: bool) -> Self {
        Self { encrypt }
    }

    fn config(&self, credentials: &Credentials) -> Config {
        let mut config = Config::new();
        config.host(&credentials.host);
        config.port(credentials.port);
        config.database(&credentials.database);
        config.application_name(APPLICATION_NAME);
        config.authentication(AuthMethod::sql_server(
            &credentials.username,
            credentials.password.expose(),
        ));
        // Servers behind RDS present certificates we cannot validate from inside the function.
        config.trust_cert();
        config.encryption(if self.encrypt {
            EncryptionLevel::Required
        } else {
            EncryptionLevel::Off
        });
        config
    }
}

#[async_trait]
impl Database for SqlServer {
    async fn connect(
        &self,
        credentials: &Credentials,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        let mut config = self.config(credentials);

        let client = match Client::connect(config.clone(), tcp(&config).await?).await {
            Ok(client) => client,
            // Azure SQL may redirect us to the node that actually hosts the database.
            Err(tiberius::error::Error::Routing { host, port }) => {
                tracing::info!(%host, port, "Following SQL Server routing redirect");
                config.host(&host);
                config.port(port);
                let stream = tcp(&config).await?;
                Client::connect(config, stream)
                    .await
                    .map_err(ConnectionError::driver)?
            }
            Err(error) => return Err(ConnectionError::driver(error)),
        };

        Ok(Box::new(SqlServerConnection { client }))
    }
}

async fn tcp(config: &Config) -> Result<Compat<TcpStream>, ConnectionError> {
    let tcp = TcpStream::connect(config.get_addr()).await?;
    tcp.set_nodelay(true)?;
    Ok(tcp.compat_write())
}

struct SqlServerConnection {
    client: Client<Compat<TcpStream>>,
}

#[async_trait]
impl Connection for SqlServerConnection {
    async fn execute(&mut self, sql: &str) -> Result<usize, QueryError> {
        let stream = self
            .client
            .simple_query(sql)
            .await
            .map_err(QueryError::driver)?;
        let results = stream.into_results().await.map_err(QueryError::driver)?;
        let rows: usize = results.iter().map(Vec::len).sum();
        tracing::debug!(result_sets = results.len(), rows, "Rows returned");
        Ok(rows)
    }

    async fn close(self: Box<Self>) -> Result<(), ConnectionError> {
        self.client.close().await.map_err(ConnectionError::driver)
    }
}
