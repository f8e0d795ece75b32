//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the custom scheme is a usable URI scheme
//! - Check placeholder prefixes and log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LinkConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::LinkConfig;
use crate::observability::logging::LOG_LEVELS;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("links.app_scheme must not be empty")]
    EmptyScheme,

    #[error("links.app_scheme '{0}' is not a valid URI scheme")]
    InvalidScheme(String),

    #[error("links.app_scheme '{0}' is reserved for universal links")]
    ReservedScheme(String),

    #[error("links.universal_host must not be empty")]
    EmptyHost,

    #[error("links.universal_host '{0}' is not a valid host")]
    InvalidHost(String),

    #[error("dispatch.placeholder_prefixes[{0}] must not be empty")]
    EmptyPlaceholder(usize),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &LinkConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let scheme = &config.links.app_scheme;
    if scheme.is_empty() {
        errors.push(ValidationError::EmptyScheme);
    } else if !scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        || !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        errors.push(ValidationError::InvalidScheme(scheme.clone()));
    } else if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
        errors.push(ValidationError::ReservedScheme(scheme.clone()));
    }

    let host = &config.links.universal_host;
    if host.is_empty() {
        errors.push(ValidationError::EmptyHost);
    } else if url::Host::parse(host).is_err() {
        errors.push(ValidationError::InvalidHost(host.clone()));
    }

    for (i, prefix) in config.dispatch.placeholder_prefixes.iter().enumerate() {
        if prefix.trim().is_empty() {
            errors.push(ValidationError::EmptyPlaceholder(i));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&LinkConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = LinkConfig::default();
        config.links.app_scheme = "https".into();
        config.links.universal_host = String::new();
        config.dispatch.placeholder_prefixes.push(" ".into());
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ReservedScheme("https".into()),
                ValidationError::EmptyHost,
                ValidationError::EmptyPlaceholder(2),
                ValidationError::UnknownLogLevel("loud".into()),
            ]
        );
    }

    #[test]
    fn test_invalid_scheme_characters() {
        let mut config = LinkConfig::default();
        config.links.app_scheme = "9futbol app".into();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidScheme("9futbol app".into())]
        );
    }

    #[test]
    fn test_invalid_host() {
        let mut config = LinkConfig::default();
        config.links.universal_host = "futbol app.com".into();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidHost("futbol app.com".into())]
        );
    }
}
