use std::process::ExitCode;

use clap::Parser;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::domain::error::AppError;
use crate::infrastructure::config::AppConfig;
use crate::interfaces::cli::{dispatch, Cli};
use crate::interfaces::commands::AppState;

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let (config, warnings) = match AppConfig::load(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            let _ = log_subscriber(EnvFilter::new("info"), std::io::stderr).try_init();
            return report_config_error(&err);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    let _ = log_subscriber(filter, std::io::stderr).try_init();

    for warning in &warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(error = %err, "Failed to start async runtime");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(config);
    match runtime.block_on(dispatch(&state, cli.command)) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to `writer` so stdout carries only command output
fn log_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

/// The message is printed once; the log line is debug-only
fn report_config_error(err: &AppError) -> ExitCode {
    tracing::debug!(error = ?err, "Failed to load configuration");
    eprintln!("{}", err);
    ExitCode::FAILURE
}
