use anyhow::Result;
use checklist_validator::{config, server};
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let mut config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // No credential, no server
    if let Err(e) = config.resolve_api_key(|name| std::env::var(name).ok()) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            if let Err(e) = validate_log_level(&log_level) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
            tracing_subscriber::EnvFilter::new(&log_level)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .init();

    info!(
        "Starting checklist validator with log level: {}",
        log_level
    );
    info!(
        "Configuration loaded: model={}, endpoint={}",
        config.llm.model, config.llm.base_url
    );

    server::run(config).await?;

    Ok(())
}
