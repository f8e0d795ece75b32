//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LinkConfig;
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

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<LinkConfig, ConfigError> {
    let config: LinkConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LinkConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.links.app_scheme, "futbolapp");
        assert_eq!(
            config.dispatch.placeholder_prefixes,
            vec!["exp://".to_string(), "http://localhost".to_string()]
        );
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
            [links]
            app_scheme = "golazo"

            [dispatch]
            placeholder_prefixes = ["exp://", "http://10.0.2.2"]
            "#,
        )
        .unwrap();
        assert_eq!(config.links.app_scheme, "golazo");
        assert_eq!(config.links.universal_host, "futbolapp.com");
        assert_eq!(config.dispatch.placeholder_prefixes.len(), 2);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[links\napp_scheme = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config("[links]\napp_scheme = \"\"").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: links.app_scheme must not be empty"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("does-not-exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("futbol_links_test_config.toml");
        std::fs::write(&path, "[observability]\nlog_level = \"debug\"\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.observability.log_level, "debug");
        std::fs::remove_file(&path).unwrap_or_default();
    }
}
