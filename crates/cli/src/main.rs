mod args;

use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webpsweep_core::{
    config_path_from_env, load_config, validate_config, BatchRunner, CwebpEncoder, Encoder,
};

use args::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    let cli = Cli::parse_operands(std::env::args_os()).unwrap_or_else(|e| e.exit());
    let directory = match cli.directory() {
        Ok(directory) => directory,
        Err(usage) => {
            println!("{}", usage);
            return ExitCode::FAILURE;
        }
    };

    match run(&directory).await {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(directory: &Path) -> Result<ExitCode> {
    // Load configuration
    let config_path = config_path_from_env();
    if let Some(ref path) = config_path {
        info!("Loading configuration from {:?}", path);
    }
    let config = load_config(config_path.as_deref()).context("Failed to load configuration")?;
    validate_config(&config).context("Configuration validation failed")?;

    // Check the encoder before touching any file
    let encoder = CwebpEncoder::new(config.encoder.clone());
    encoder
        .validate()
        .await
        .with_context(|| format!("Encoder {:?} is not usable", config.encoder.path))?;

    let runner = BatchRunner::new(encoder).with_traversal(config.scan.traversal);
    let report = runner
        .run(directory)
        .await
        .with_context(|| format!("Failed to convert images in {:?}", directory))?;

    if report.has_failures() {
        warn!(
            "{} of {} file(s) were not converted cleanly",
            report.failed(),
            report.candidates()
        );
        for input in report.failed_inputs() {
            warn!("  {}", input.display());
        }
        if config.batch.fail_on_error {
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
