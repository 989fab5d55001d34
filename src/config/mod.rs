mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML config named by `CONFIG_PATH` and layers environment
/// overrides on top. A missing `config.yaml` in the working directory falls
/// back to defaults; a missing file named explicitly is an error.
pub async fn load() -> Result<Config> {
    let explicit = env::var("CONFIG_PATH").ok();
    let config_path = explicit
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match load_from(&config_path).await {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound && explicit.is_none() => {
            debug!("No {} found, using default configuration", config_path);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    apply_env_overrides(&mut config, |key| env::var(key).ok());
    Ok(config)
}

/// Reads one YAML file, without environment overrides.
pub async fn load_from(path: impl AsRef<std::path::Path>) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    from_yaml(&config_str)
}

pub fn from_yaml(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to a defaulted struct.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Applies environment overrides through `lookup` so callers and tests don't
/// have to mutate the process environment.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup("GEMINI_API_KEY").or_else(|| lookup("LLM_API_KEY")) {
        config.llm.api_key = key;
    }
    if let Some(model) = lookup("LLM_MODEL") {
        config.llm.model = model;
    }
    if let Some(base_url) = lookup("LLM_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(api_url) = lookup("ETYMOLOGY_API_URL") {
        config.client.api_base_url = api_url;
    }
}

impl Config {
    /// Checks what the proxy needs before it can serve anything.
    pub fn validate_for_server(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(
                "No API key configured: set GEMINI_API_KEY or llm.api_key",
            ));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        Ok(())
    }
}
