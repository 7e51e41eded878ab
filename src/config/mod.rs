mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let config = load_from_path(&config_path).await?;
    apply_overrides(config, |key| env::var(key).ok())
}

/// Reads a YAML config file. A missing file yields the defaults.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(config_str) => Ok(serde_yaml::from_str(&config_str)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Layers environment values over a loaded config. `lookup` is `env::var` in
/// production and a map in tests.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup("OPENAI_API_KEY") {
        config.upstream.api_key = Some(key);
    }
    if let Some(model) = lookup("OPENAI_MODEL") {
        config.upstream.model = model;
    }
    if let Some(endpoint) = lookup("OPENAI_ENDPOINT") {
        config.upstream.endpoint = endpoint;
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("PORT must be a valid number, got '{}'", port)))?;
    }

    Ok(config)
}
