use crate::{Error, Result};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Validates that a log level string is valid
pub fn validate_log_level(level: &str) -> Result<()> {
    level.parse::<LevelFilter>().map_err(|_| {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        ))
    })?;
    Ok(())
}

/// Picks the log level: `RUST_LOG` wins over the configured one.
pub fn resolve_log_level(configured: &str) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| configured.to_string())
}

/// Installs the JSON subscriber. `RUST_LOG` directives take precedence over
/// `configured_level`. Output goes to stderr so a terminal front end keeps
/// stdout for itself.
pub fn init(configured_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            validate_log_level(configured_level)?;
            EnvFilter::new(configured_level)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .try_init()
        .map_err(|e| Error::internal(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_log_level() {
        for level in ["error", "warn", "info", "debug", "trace", "off"] {
            assert!(validate_log_level(level).is_ok(), "{level} should be valid");
        }

        let err = validate_log_level("verbose").unwrap_err();
        assert!(err.to_string().contains("Invalid log level: 'verbose'"));
    }
}
