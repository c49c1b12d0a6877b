mod types;

pub use types::*;

use crate::Result;
use std::env;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await,
        Err(_) if !Path::new(DEFAULT_CONFIG_PATH).exists() => {
            debug!(
                "No {} found, using default configuration",
                DEFAULT_CONFIG_PATH
            );
            Ok(Config::default())
        }
        Err(_) => load_from(DEFAULT_CONFIG_PATH).await,
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
