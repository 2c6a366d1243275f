use clap::Parser;
use raffle_press::utils::{logger, validation::Validate};
use raffle_press::{CardPipeline, CliConfig, HttpTicketStore, LocalStorage, PressEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting raffle-press");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Roster and output paths are resolved relative to the working directory.
    let storage = LocalStorage::new(".".to_string());
    let store = HttpTicketStore::new(config.store_url.clone());
    let pipeline = CardPipeline::new(storage, store, config);

    let engine = PressEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Print run completed successfully!");
            println!("✅ Print sheet ready");
            println!("📄 Saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Print run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
