//! Preference store bootstrapper.
//!
//! Connects to the configured SQLite database, creates the preference tables
//! and seeds group and preference definitions. Safe to run on every deploy.

use std::sync::Arc;

use tracing::info;

use preference_store::adapters::sqlite::{self, SqlitePreferenceSchema};
use preference_store::application::BootstrapHandler;
use preference_store::config::{AppConfig, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.logging)?;

    let pool = sqlite::connect(&config.database).await?;
    let handler = BootstrapHandler::new(Arc::new(SqlitePreferenceSchema::new(pool.clone())));
    let report = handler.handle_config(&config.seed).await?;

    if report.is_noop() {
        info!("Preference store already up to date");
    }

    pool.close().await;
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = logging.env_filter()?;

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    Ok(())
}
