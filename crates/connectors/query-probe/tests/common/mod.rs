//! Common functions used across test cases.

use std::sync::Arc;

use query_probe::{ProbeRequest, State};
use query_probe_configuration::ProbeConfiguration;
use tests_common::secrets::HEALTH_DB_SECRET_ID;
use tests_common::{FakeDatabase, RecordingSink, StaticSecretStore};

/// A probe state wired to in-memory collaborators, which stay reachable for assertions.
pub struct Harness {
    pub secrets: Arc<StaticSecretStore>,
    pub database: Arc<FakeDatabase>,
    pub metrics: Arc<RecordingSink>,
    pub state: State,
}

impl Harness {
    pub fn new(database: FakeDatabase) -> Self {
        Self::with(
            StaticSecretStore::with_fixtures(),
            database,
            RecordingSink::default(),
        )
    }

    pub fn with(secrets: StaticSecretStore, database: FakeDatabase, metrics: RecordingSink) -> Self {
        tests_common::init_logging();

        let secrets = Arc::new(secrets);
        let database = Arc::new(database);
        let metrics = Arc::new(metrics);
        let state = State::new(
            ProbeConfiguration::default(),
            secrets.clone(),
            database.clone(),
            metrics.clone(),
        );

        Harness {
            secrets,
            database,
            metrics,
            state,
        }
    }
}

pub fn request(sql: &str, query_name: &str, db_secret: &str) -> ProbeRequest {
    ProbeRequest {
        sql: sql.to_string(),
        query_name: query_name.to_string(),
        db_secret: db_secret.to_string(),
    }
}

/// `SELECT 1` against the health database.
pub fn health_request() -> ProbeRequest {
    request("SELECT 1", "health", HEALTH_DB_SECRET_ID)
}
