//! Statement execution against the target database.
//!
//! A probe opens one connection, runs one statement and closes the connection again. Both the
//! connection attempt and the statement are timed and bounded by a timeout.

pub mod database;
pub mod error;
pub mod execution;
pub mod postgres;
pub mod sqlserver;

pub use database::{Connection, Database, EngineDatabase};
pub use error::{ConnectionError, Error, QueryError};
pub use execution::{measure, Measurement};
