//! In-memory stand-ins for the probe's collaborators, shared by the integration tests.

pub mod database;
pub mod metrics;
pub mod secrets;

pub use database::FakeDatabase;
pub use metrics::RecordingSink;
pub use secrets::StaticSecretStore;

/// Route log output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
