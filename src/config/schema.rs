//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

/// Root configuration for the deep link router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LinkConfig {
    /// Links accepted and produced by the application.
    pub links: LinksConfig,

    /// Dispatch behaviour.
    pub dispatch: DispatchConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Identity of the application's deep links.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Custom URI scheme (e.g., "futbolapp" for `futbolapp://match/1`).
    pub app_scheme: String,

    /// Host registered for universal links.
    pub universal_host: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            app_scheme: "futbolapp".to_string(),
            universal_host: "futbolapp.com".to_string(),
        }
    }
}

/// Dispatcher configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Prefixes of development/preview URLs that are ignored outright.
    pub placeholder_prefixes: Vec<String>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            placeholder_prefixes: vec!["exp://".to_string(), "http://localhost".to_string()],
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
