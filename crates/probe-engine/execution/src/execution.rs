//! Time a statement against the database.

use std::future::Future;
use std::time::Duration;

use tokio::time::error::Elapsed;
use tokio::time::Instant;
use tracing::{info_span, Instrument};

use query_probe_configuration::{Credentials, DatabaseConnectionSettings};

use crate::database::{Connection, Database};
use crate::error::{ConnectionError, Error, QueryError};

/// What we learned from one probe.
///
/// Timings that were never measured are zero: a failed connection leaves both at zero, a failed
/// query leaves `response_time` at zero.
#[derive(Debug)]
pub struct Measurement {
    pub connection_time: Duration,
    pub response_time: Duration,
    /// The number of rows read, or the first error encountered.
    pub outcome: Result<usize, Error>,
}

impl Measurement {
    fn failed(connection_time: Duration, error: impl Into<Error>) -> Self {
        Measurement {
            connection_time,
            response_time: Duration::ZERO,
            outcome: Err(error.into()),
        }
    }
}

/// Connect, run `sql` once and disconnect.
///
/// The connection is closed on every path once it has been opened, including when the statement
/// fails or times out. A failure to close is logged and does not affect the measurement.
pub async fn measure(
    database: &dyn Database,
    credentials: &Credentials,
    sql: &str,
    settings: &DatabaseConnectionSettings,
) -> Measurement {
    let connect_timeout = settings.connect_timeout();
    let connect_span = info_span!(
        "Connect to database",
        engine = %credentials.engine,
        host = %credentials.host,
        port = credentials.port,
    );
    let (mut connection, connection_time) =
        match timed(connect_timeout, database.connect(credentials))
            .instrument(connect_span)
            .await
        {
            Ok((Ok(connection), elapsed)) => (connection, elapsed),
            Ok((Err(error), _)) => return Measurement::failed(Duration::ZERO, error),
            Err(_) => {
                return Measurement::failed(
                    Duration::ZERO,
                    ConnectionError::Timeout(connect_timeout),
                )
            }
        };

    tracing::info!(
        connection_time = connection_time.as_secs_f64(),
        "Database connection established"
    );

    let query_timeout = settings.query_timeout();
    tracing::info!(sql, "Executing query");
    let executed = timed(query_timeout, connection.execute(sql))
        .instrument(info_span!("Execute query"))
        .await;

    close(connection, connect_timeout).await;

    match executed {
        Ok((Ok(rows), response_time)) => {
            tracing::info!(
                rows,
                response_time = response_time.as_secs_f64(),
                "Query executed successfully"
            );
            Measurement {
                connection_time,
                response_time,
                outcome: Ok(rows),
            }
        }
        Ok((Err(error), _)) => Measurement::failed(connection_time, error),
        Err(_) => Measurement::failed(connection_time, QueryError::Timeout(query_timeout)),
    }
}

/// Run `future` with a deadline, returning its output together with how long it took.
async fn timed<F: Future>(limit: Duration, future: F) -> Result<(F::Output, Duration), Elapsed> {
    let start = Instant::now();
    let output = tokio::time::timeout(limit, future).await?;
    Ok((output, start.elapsed()))
}

async fn close(connection: Box<dyn Connection>, limit: Duration) {
    match tokio::time::timeout(limit, connection.close()).await {
        Ok(Ok(())) => tracing::info!("Database connection closed"),
        Ok(Err(error)) => tracing::warn!(%error, "Unable to close the database connection cleanly"),
        Err(_) => tracing::warn!(timeout = ?limit, "Timed out closing the database connection"),
    }
}
