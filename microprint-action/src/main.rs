//! Microprint Action
//!
//! Runs as a step of a CI job and draws a microprint of another job's log.
//!
//! Architecture:
//! - Configuration: Load settings from the step's environment
//! - Resolver: Find the job id for the configured job name
//! - Fetcher: Download the job's log, optionally keeping a raw copy
//! - Pipeline: Strip escape sequences and hand the text to the renderer
//!
//! Every stage runs once, in order; the first failure ends the process with
//! a non-zero exit status.

mod config;
mod error;
mod fetcher;
mod pipeline;
mod resolver;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use microprint_client::GitHubClient;
use microprint_render::Microprinter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "microprint_action=info,microprint_client=info,microprint_render=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Microprint Action");

    // Load configuration
    let config = load_config()?;
    info!(
        "Loaded configuration: repository={}, run_id={}, job_name={}, render_mode={}",
        config.repository, config.run_id, config.job_name, config.render_mode
    );

    let client = GitHubClient::new(
        config.api_url.clone(),
        config.repository.clone(),
        config.token.clone(),
    );
    let renderer = Microprinter::default();

    match pipeline::run(&config, &client, &renderer).await {
        Ok(path) => {
            info!("Microprint written to {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Microprint failed: {}", e);
            Err(e).context("failed to produce microprint")
        }
    }
}

/// Loads and validates configuration from environment variables
fn load_config() -> Result<Config> {
    let config = Config::from_env().context("failed to load configuration")?;
    config.validate()?;
    Ok(config)
}
