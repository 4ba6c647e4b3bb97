//! Errors for connecting to and querying the database.

use std::time::Duration;

use thiserror::Error;

/// An error reported by a database driver.
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

/// Something went wrong while probing the database.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Connection(#[from] ConnectionError),
    #[error("{0}")]
    Query(#[from] QueryError),
}

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("timed out after {0:?} while connecting to the database")]
    Timeout(Duration),
    #[error("unable to reach the database server: {0}")]
    Io(#[from] std::io::Error),
    #[error("the database refused the connection: {0}")]
    Driver(#[source] DriverError),
}

impl ConnectionError {
    pub fn driver(error: impl Into<DriverError>) -> Self {
        ConnectionError::Driver(error.into())
    }
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("timed out after {0:?} while executing the query")]
    Timeout(Duration),
    #[error("query execution failed: {0}")]
    Driver(#[source] DriverError),
}

impl QueryError {
    pub fn driver(error: impl Into<DriverError>) -> Self {
        QueryError::Driver(error.into())
    }
}
