use clap::Parser;
use std::sync::Arc;
use suacam_directory::utils::{logger, validation::Validate};
use suacam_directory::{server, CliConfig, SheetClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting suacam-directory");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let sheet = Arc::new(SheetClient::from_config(&config));

    server::run(&config, sheet).await?;

    tracing::info!("✅ suacam-directory stopped");
    Ok(())
}
