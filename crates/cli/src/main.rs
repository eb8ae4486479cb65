use crate::{
    error::CliError,
    shutdown::{ExitCode, ShutdownCoordinator},
};
use clap::Parser;
use commands::Commands;
use connectors::http::{client::ApiClient, source::HttpDataSource};
use engine_runtime::{
    error::SyncError,
    execution::executor,
    settings::{DEFAULT_VERSION_PATH, SyncSettings},
};
use model::version::{Version, VersionError};
use std::{path::PathBuf, sync::Arc};
use tokio_util::sync::CancellationToken;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;
mod shutdown;

#[derive(Parser)]
#[command(name = "datamirror", version = "0.1.0", about = "Dataset mirroring tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(CliError::Sync(SyncError::ShutdownRequested)) => {
            error!("Run aborted by shutdown request, nothing written");
            ExitCode::ShutdownRequested
        }
        Err(e) => {
            error!("{e}");
            ExitCode::GeneralError
        }
    };
    std::process::exit(code.as_i32());
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Sync {
            dry_run,
            api_url,
            page_size,
            max_concurrency,
            json_path,
            csv_path,
            version_path,
            json,
        } => {
            let mut settings = SyncSettings::from_env()?;
            if let Some(api_url) = api_url {
                settings.api_url = api_url;
            }
            if let Some(page_size) = page_size {
                settings.page_size = page_size;
            }
            if let Some(max_concurrency) = max_concurrency {
                settings.max_concurrency = max_concurrency;
            }
            if let Some(json_path) = json_path {
                settings.json_path = json_path;
            }
            if let Some(csv_path) = csv_path {
                settings.csv_path = csv_path;
            }
            if let Some(version_path) = version_path {
                settings.version_path = version_path;
            }
            settings.validate()?;

            let shutdown = ShutdownCoordinator::new(CancellationToken::new());
            shutdown.register_handlers();

            let client = ApiClient::new(&settings.api_url, &settings.api_token)?;
            let source = Arc::new(HttpDataSource::new(client, settings.page_size));

            let summary =
                executor::run(source, &settings, dry_run, shutdown.cancel_token()).await?;
            output::print_summary(&summary, json)?;
        }
        Commands::VersionInfo { version_path } => {
            let path = version_path.unwrap_or_else(|| PathBuf::from(DEFAULT_VERSION_PATH));
            let raw = std::fs::read_to_string(path)?;
            let record: serde_json::Value = serde_json::from_str(&raw)?;
            let version = record
                .get("version")
                .and_then(serde_json::Value::as_str)
                .ok_or_else(|| {
                    VersionError::InvalidRecord("no 'version' string field".to_string())
                })?
                .parse::<Version>()?;
            println!("{version}");
        }
    }

    Ok(())
}
