//! Deep link types and error definitions.

use serde::Serialize;
use thiserror::Error;

/// Result of parsing an incoming link.
///
/// `path` always starts with `/` and never ends with `/` unless it is the
/// root path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLink {
    pub path: String,
    pub is_valid: bool,
}

/// Shape of an incoming link string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `futbolapp://match/123`
    CustomScheme,
    /// `https://futbolapp.com/league/9`
    Universal,
    /// `/players` or `favorites`
    BarePath,
}

/// Fault raised by the navigation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The UI layer could not route to the path.
    #[error("Unroutable path: {0}")]
    Unroutable(String),

    /// The navigation layer is not ready to accept transitions.
    #[error("Navigator unavailable: {0}")]
    Unavailable(String),
}

/// Reasons a link is not followed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Input was empty or whitespace.
    #[error("Empty link")]
    Empty,

    /// Development server or preview URL, not a real deep link.
    #[error("Ignoring development placeholder URL: {0}")]
    Placeholder(String),

    /// Absolute URL that failed URL syntax parsing.
    #[error("Malformed URL '{url}': {reason}")]
    Malformed { url: String, reason: String },

    /// Well-formed link whose path matches no route.
    #[error("No route matches path {0}")]
    UnknownRoute(String),

    /// Detail route built without an id.
    #[error("Route {0} requires a numeric id")]
    MissingId(&'static str),

    /// Detail id was not a run of decimal digits.
    #[error("Invalid id '{id}' for route {route}")]
    InvalidId { route: &'static str, id: String },

    /// Literal route given an id.
    #[error("Route {0} does not take an id")]
    UnexpectedId(&'static str),

    /// Navigation collaborator rejected the path.
    #[error("Navigation failed: {0}")]
    Navigation(#[from] NavigationError),
}

impl LinkError {
    /// Short stable label for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            LinkError::Empty => "empty",
            LinkError::Placeholder(_) => "placeholder",
            LinkError::Malformed { .. } => "malformed",
            LinkError::UnknownRoute(_) => "unknown_route",
            LinkError::MissingId(_) | LinkError::InvalidId { .. } | LinkError::UnexpectedId(_) => {
                "invalid_share"
            }
            LinkError::Navigation(_) => "navigation_failed",
        }
    }
}

/// Result type for deep link operations.
pub type LinkResult<T> = Result<T, LinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_link_json_uses_camel_case() {
        let link = ParsedLink {
            path: "/news".into(),
            is_valid: true,
        };
        assert_eq!(
            serde_json::to_string(&link).unwrap(),
            r#"{"path":"/news","isValid":true}"#
        );
    }

    #[test]
    fn test_navigation_error_converts() {
        let err: LinkError = NavigationError::Unroutable("/x".into()).into();
        assert_eq!(err.reason(), "navigation_failed");
        assert_eq!(err.to_string(), "Navigation failed: Unroutable path: /x");
    }
}
