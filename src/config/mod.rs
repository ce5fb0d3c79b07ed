mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Loads configuration from the YAML file named by `CONFIG_PATH`
/// (default `config.yaml`), then applies the `BACKEND_ADDRESS` override.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from_path(&config_path).await?;

    if let Ok(address) = env::var("BACKEND_ADDRESS") {
        config.backend.address = address;
    }

    Ok(config)
}

/// Reads and parses a config file. A missing file is not an error; it
/// yields the built-in defaults.
pub async fn load_from_path(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    match tokio::fs::read_to_string(path).await {
        Ok(config_str) => Ok(serde_yaml::from_str(&config_str)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}
