use std::sync::Arc;
use tattoogen::{config, logger, server, Config, StabilityClient};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(logger::LoggerConfig::from_env())?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = config::install(Config::from_env())?;
    logger::log_config_info(config);

    let client = match StabilityClient::new(config.stability.clone()) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Failed to initialize Stability client: {}", e);
            return Err(e.into());
        }
    };

    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), config);
    server::run(config, Arc::new(client.image().clone())).await?;

    log::info!("👋 Server stopped");
    Ok(())
}
