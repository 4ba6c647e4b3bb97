//! Run a single probe from the command line.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use probe_engine_execution::EngineDatabase;
use probe_engine_metrics::{CloudWatchSink, MetricSink, PrometheusSink};
use probe_engine_secrets::{AwsSecretsManager, EnvironmentSecretStore, SecretStore};
use query_probe::state::load_sdk_config;
use query_probe::{ProbeRequest, ProbeResponse, QueryProbe, State};
use query_probe_configuration::environment::ProcessEnvironment;
use query_probe_configuration::ProbeConfiguration;

#[derive(Debug, Parser)]
#[command(name = "query-probe-cli", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one probe and print the response.
    Invoke(InvokeArgs),
}

#[derive(Debug, clap::Args)]
struct InvokeArgs {
    /// The statement to execute.
    #[arg(long, required_unless_present = "event", conflicts_with = "event")]
    sql: Option<String>,
    /// The name reported as the metric dimension.
    #[arg(long, required_unless_present = "event", conflicts_with = "event")]
    query_name: Option<String>,
    /// The identifier of the secret holding the database credentials.
    #[arg(long, required_unless_present = "event", conflicts_with = "event")]
    db_secret: Option<String>,
    /// A JSON file holding a complete invocation event.
    #[arg(long)]
    event: Option<PathBuf>,
    /// Where metrics are published.
    #[arg(long, value_enum, default_value_t = SinkKind::Cloudwatch)]
    sink: SinkKind,
    /// Where database credentials are read from.
    #[arg(long, value_enum, default_value_t = SecretsKind::Aws)]
    secrets: SecretsKind,

    #[command(flatten)]
    configuration: ProbeConfiguration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SinkKind {
    Cloudwatch,
    Prometheus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SecretsKind {
    Aws,
    Environment,
}

#[tokio::main]
pub async fn main() -> ExitCode {
    query_probe::logging::init_tracing(true);

    let Cli { command } = Cli::parse();
    let result = match command {
        Command::Invoke(args) => invoke(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn invoke(args: InvokeArgs) -> anyhow::Result<()> {
    let event = match &args.event {
        Some(path) => {
            let contents = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("unable to read event file {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("{} is not valid JSON", path.display()))?
        }
        None => serde_json::json!({
            "sql": args.sql,
            "query_name": args.query_name,
            "db_secret": args.db_secret,
        }),
    };
    let request = ProbeRequest::from_event(event)?;

    let configuration = args.configuration;
    let sdk_config = load_sdk_config(&configuration).await;

    let secrets: Arc<dyn SecretStore> = match args.secrets {
        SecretsKind::Aws => Arc::new(AwsSecretsManager::new(&sdk_config)),
        SecretsKind::Environment => Arc::new(EnvironmentSecretStore::new(ProcessEnvironment)),
    };

    let mut registry = prometheus::Registry::new();
    let metrics: Arc<dyn MetricSink> = match args.sink {
        SinkKind::Cloudwatch => Arc::new(CloudWatchSink::new(&sdk_config)),
        SinkKind::Prometheus => Arc::new(
            PrometheusSink::initialize(&mut registry)
                .context("unable to register Prometheus metrics")?,
        ),
    };

    let database = Arc::new(EngineDatabase::new(&configuration.connection_settings));
    let state = State::new(configuration, secrets, database, metrics);

    let result = QueryProbe::new(&state).run(&request).await?;
    let response = ProbeResponse::from(&result);
    println!("{}", serde_json::to_string_pretty(&response)?);

    if args.sink == SinkKind::Prometheus {
        let exposition = prometheus::TextEncoder::new()
            .encode_to_string(&registry.gather())
            .context("unable to encode Prometheus metrics")?;
        print!("{exposition}");
    }

    Ok(())
}
