use refresh_seeds::core::ConfigProvider;
use refresh_seeds::utils::{error::EtlError, logger, validation::Validate};
use refresh_seeds::{EtlEngine, LocalStorage, SeedConfig, SeedPipeline};

fn fail(e: &EtlError) -> ! {
    tracing::error!(
        "❌ Seed refresh failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match SeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Logging isn't configured yet; report straight to stderr.
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::info!("Starting refresh-seeds");
    tracing::debug!("Config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let storage = LocalStorage::new(config.output_dir());
    let pipeline = match SeedPipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => fail(&e),
    };

    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ Seed refresh completed: {} rows in {}",
                summary.rows_written,
                summary.output_path.display()
            );
        }
        Err(e) => fail(&e),
    }
}
