use anyhow::Context;
use shipment_loader::{config::Config, services::LoaderService};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let result = LoaderService::new(config.clone()).run().await;

    Ok(ExitCode::from(config.exit_status(&result)))
}
