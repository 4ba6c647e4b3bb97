//! Measure how long a SQL statement takes against a database described by a secret, and report
//! the timings as metrics.

pub mod error;
pub mod logging;
pub mod probe;
pub mod request;
pub mod response;
pub mod state;

pub use error::ProbeError;
pub use probe::{ProbeResult, ProbeStatus, QueryProbe};
pub use request::ProbeRequest;
pub use response::{ProbeResponse, ResponseBody};
pub use state::{create_state, State};
