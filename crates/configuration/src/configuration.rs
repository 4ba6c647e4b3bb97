//! Configuration for the probe.

use clap::Parser;

use crate::connection_settings::DatabaseConnectionSettings;

pub const DEFAULT_REGION_VARIABLE: &str = "AWS_REGION";

/// The 'ProbeConfiguration' type collects everything the probe reads once at process start.
///
/// Values come from command line flags or, more commonly when running as a function, from the
/// environment. Nothing in here is specific to a single invocation: per-invocation input lives in
/// the request, and database credentials are resolved from the secrets store on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
pub struct ProbeConfiguration {
    /// Region used by the secrets and metrics clients. Falls back to the SDK default chain.
    #[arg(long, env = DEFAULT_REGION_VARIABLE)]
    pub region: Option<String>,

    #[command(flatten)]
    pub connection_settings: DatabaseConnectionSettings,
}

impl ProbeConfiguration {
    /// Read the configuration from the process environment only, ignoring command line arguments.
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::try_parse_from(["query-probe"])
    }
}
