//! Navigation dispatch for incoming deep links.
//!
//! # Pipeline
//! ```text
//! url
//!   → empty / placeholder?  → ignored (false)
//!   → parse                 → malformed (false)
//!   → route valid?          → unknown route (false)
//!   → Navigator::navigate   → navigation failed (false) | navigated (true)
//! ```
//!
//! # Design Decisions
//! - Stateless between calls; the config is read-only and shared
//! - Every rejection is logged and counted, none is fatal
//! - The navigator is invoked at most once per call

use std::sync::Arc;

use crate::config::schema::DispatchConfig;
use crate::deeplink::parser::try_parse_deep_link;
use crate::deeplink::types::{LinkError, LinkResult, NavigationError};
use crate::observability::metrics;
use crate::routing::route_label;

/// The application's navigation layer.
pub trait Navigator: Send + Sync {
    /// Transition to a normalized in-app path.
    fn navigate(&self, path: &str) -> Result<(), NavigationError>;
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        (**self).navigate(path)
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        (**self).navigate(path)
    }
}

/// Routes incoming links to a [`Navigator`].
#[derive(Debug, Clone)]
pub struct Dispatcher<N> {
    navigator: N,
    config: Arc<DispatchConfig>,
}

impl<N: Navigator> Dispatcher<N> {
    /// Create a dispatcher with the default placeholder prefixes.
    pub fn new(navigator: N) -> Self {
        Self::with_config(navigator, DispatchConfig::default())
    }

    /// Create a dispatcher with explicit configuration.
    pub fn with_config(navigator: N, config: DispatchConfig) -> Self {
        Self {
            navigator,
            config: Arc::new(config),
        }
    }

    /// The wrapped navigator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// True if the url is a development server or preview placeholder.
    ///
    /// Scheme and host are case-insensitive, so prefixes are too.
    pub fn is_placeholder(&self, url: &str) -> bool {
        self.config.placeholder_prefixes.iter().any(|prefix| {
            url.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }

    /// Run the full pipeline, returning the navigated path or the reason
    /// the link was not followed.
    pub fn dispatch(&self, url: &str) -> LinkResult<String> {
        let url = url.trim();
        if url.is_empty() {
            return Err(LinkError::Empty);
        }
        if self.is_placeholder(url) {
            return Err(LinkError::Placeholder(url.to_string()));
        }

        let parsed = try_parse_deep_link(url)?;
        if !parsed.is_valid {
            return Err(LinkError::UnknownRoute(parsed.path));
        }

        self.navigator.navigate(&parsed.path)?;
        Ok(parsed.path)
    }

    /// Follow a deep link. Returns true only if the navigator accepted it.
    pub fn navigate_to_deep_link(&self, url: &str) -> bool {
        match self.dispatch(url) {
            Ok(path) => {
                let route = route_label(&path);
                tracing::info!(url = %url, path = %path, route, "Navigated to deep link");
                metrics::record_dispatch(metrics::OUTCOME_NAVIGATED);
                metrics::record_navigation(route);
                true
            }
            Err(e) => {
                match &e {
                    LinkError::Empty | LinkError::Placeholder(_) => {
                        tracing::debug!(url = %url, reason = e.reason(), "Ignoring link");
                    }
                    LinkError::UnknownRoute(path) => {
                        tracing::warn!(url = %url, path = %path, "Invalid deep link route");
                    }
                    _ => {
                        tracing::warn!(url = %url, reason = e.reason(), error = %e, "Deep link not followed");
                    }
                }
                metrics::record_dispatch(e.reason());
                false
            }
        }
    }
}
