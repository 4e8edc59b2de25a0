//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub seed: Option<bool>,
}

/// Parse a TOML file without semantic checks.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    resolve_config(Some(path), ConfigOverrides::default())
}

/// Read the file (or defaults), apply overrides, then validate once.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => AppConfig::default(),
    };

    if let Some(bind_address) = overrides.bind_address {
        config.listener.bind_address = bind_address;
    }
    if let Some(seed) = overrides.seed {
        config.store.seed = seed;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp("employee-api-valid", "[timeouts]\nrequest_secs = 5\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.timeouts.request_secs, 5);
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_error() {
        let path = write_temp("employee-api-parse", "[listener\n");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_overrides_applied_before_validation() {
        let path = write_temp(
            "employee-api-override",
            "[listener]\nbind_address = \"not an address\"\n",
        );
        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));

        let overrides = ConfigOverrides {
            bind_address: Some("127.0.0.1:9000".into()),
            seed: Some(false),
        };
        let config = resolve_config(Some(&path), overrides).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert!(!config.store.seed);
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_invalid_override_rejected() {
        let overrides = ConfigOverrides {
            bind_address: Some("nowhere".into()),
            seed: None,
        };
        assert!(matches!(
            resolve_config(None, overrides),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validation_error_message() {
        let path = write_temp(
            "employee-api-invalid",
            "[timeouts]\nrequest_secs = 0\n[security]\nmax_body_size = 0\n",
        );
        let err = load_config(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: timeouts.request_secs: must be greater than zero, \
             security.max_body_size: must be greater than zero"
        );
        fs::remove_file(path).unwrap_or_default();
    }
}
