//! Route validation and lookup.
//!
//! # Responsibilities
//! - Decide whether a path names a known in-app route
//! - Resolve the matching route and its detail id
//! - Provide display labels for observability
//!
//! # Design Decisions
//! - Pure functions over the static table (no shared mutable state)
//! - Missing leading slash is tolerated here, callers need not normalize
//! - Labels never feed back into control flow

use serde::Serialize;

use crate::routing::matcher::{detail_id, RouteName, RouteRule, ROUTE_TABLE};

/// A resolved route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub route: RouteName,
    /// Decimal id for detail routes, kept as text so long ids are preserved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

fn with_leading_slash(path: &str) -> std::borrow::Cow<'_, str> {
    if path.starts_with('/') {
        path.into()
    } else {
        format!("/{path}").into()
    }
}

/// Returns true if the path matches any route in the table.
pub fn is_valid_route(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    let path = with_leading_slash(path);
    ROUTE_TABLE.iter().any(|r| r.matches(&path))
}

/// Finds the route a path belongs to.
pub fn resolve_route(path: &str) -> Option<RouteMatch> {
    if path.is_empty() {
        return None;
    }
    let path = with_leading_slash(path);
    let name = ROUTE_TABLE.iter().copied().find(|r| r.matches(&path))?;
    let id = match name.rule() {
        RouteRule::Detail(segment) => detail_id(segment, &path).map(str::to_string),
        RouteRule::Literal(_) => None,
    };
    Some(RouteMatch { route: name, id })
}

/// Label for a path in logs and metrics.
pub fn route_label(path: &str) -> &'static str {
    resolve_route(path)
        .map(|m| m.route.as_str())
        .unwrap_or("unknown")
}
