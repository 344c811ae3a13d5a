use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{CandidateFile, FileSource, HttpAnalysisClient, UploadController};
use tracing_subscriber::EnvFilter;

mod config;
mod terminal;

use config::load_settings;
use terminal::TerminalPresenter;

#[derive(Parser, Debug)]
#[command(name = "flowgrade", about = "Submit flowchart images for automated assessment")]
struct Args {
    /// Analysis service base URL; overrides the config file and environment.
    #[arg(long, global = true)]
    server_url: Option<String>,
    /// Settings file (defaults to ./flowgrade.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload an image and print its assessment. Several paths act like a drop: the first wins.
    Analyze {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Print the rendered results as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Check that the analysis service is up.
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let client = HttpAnalysisClient::new(&settings.server_url)?;
    match args.command {
        Command::Analyze { paths, json } => analyze(&client, paths, json).await,
        Command::Health => {
            let health = client
                .health()
                .await
                .with_context(|| format!("health check against {} failed", client.server_url()))?;
            println!("{}: {}", client.server_url(), health.status);
            Ok(())
        }
    }
}

/// One path is a chooser selection, several are a drop. Only the first path is
/// ever loaded, so the others need not exist.
async fn load_source(paths: &[PathBuf]) -> Result<FileSource> {
    let Some((first, rest)) = paths.split_first() else {
        return Ok(FileSource::Chosen(Vec::new()));
    };
    let candidate = CandidateFile::from_path(first).await?;

    if rest.is_empty() {
        Ok(FileSource::Chosen(vec![candidate]))
    } else {
        tracing::debug!(ignored = rest.len(), "using first of dropped paths");
        Ok(FileSource::Dropped(vec![candidate]))
    }
}

async fn analyze(client: &HttpAnalysisClient, paths: Vec<PathBuf>, json: bool) -> Result<()> {
    let source = load_source(&paths).await?;
    let mut controller = UploadController::new(TerminalPresenter::stdout(json));
    if let Some(request) = controller.acquire(source)? {
        let decoded = request.decode().await?;
        controller.apply_preview(decoded);
    }

    controller.analyze(client).await?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
