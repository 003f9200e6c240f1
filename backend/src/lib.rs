//! Farmer Registry - HTTP boundary
//!
//! Adapts the shared schemas to axum: a validating JSON extractor, the
//! error envelope returned to callers, configuration and tracing setup for
//! the host application.

pub mod config;
pub mod error;
pub mod extract;
pub mod telemetry;

pub use crate::config::Config;
pub use error::{AppError, AppResult};
pub use extract::ValidatedJson;

/// Load `.env`, configuration and tracing in the order a host binary needs them
pub fn bootstrap() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();
    let config = Config::load()?;
    telemetry::init(&config.log)?;

    tracing::info!("Farmer registry schemas loaded");
    tracing::info!("Environment: {}", config.environment);

    Ok(config)
}
