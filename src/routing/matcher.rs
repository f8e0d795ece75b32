//! Route pattern table.
//!
//! # Responsibilities
//! - Enumerate every in-app route the application can be deep linked to
//! - Describe each route with a structural rule (literal or detail)
//! - Test a normalized path against a single rule
//!
//! # Design Decisions
//! - Routes are a closed enum, so the table is exhaustive by construction
//! - No regex: literal comparison and a digit scan are enough
//! - Rules are mutually exclusive, so table order carries no priority
//! - Detail ids are unbounded digit strings (never parsed into an integer)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Structural matching rule for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRule {
    /// Matches any of the listed exact paths.
    Literal(&'static [&'static str]),
    /// Matches `/<segment>/<digits>`.
    Detail(&'static str),
}

impl RouteRule {
    /// Returns true if the normalized path satisfies this rule.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            RouteRule::Literal(paths) => paths.iter().any(|p| *p == path),
            RouteRule::Detail(segment) => detail_id(segment, path).is_some(),
        }
    }
}

/// Extracts the numeric id of a `/<segment>/<digits>` path.
pub(crate) fn detail_id<'a>(segment: &str, path: &'a str) -> Option<&'a str> {
    let rest = path.strip_prefix('/')?.strip_prefix(segment)?.strip_prefix('/')?;
    if is_numeric_id(rest) {
        Some(rest)
    } else {
        None
    }
}

/// One or more ASCII decimal digits.
pub(crate) fn is_numeric_id(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Logical name of an in-app route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteName {
    Home,
    Leagues,
    Predictions,
    Favorites,
    Comparison,
    News,
    Players,
    Search,
    Match,
    Team,
    Player,
    League,
    ComparisonResults,
}

/// Every route, in table order.
pub const ROUTE_TABLE: &[RouteName] = &[
    RouteName::Home,
    RouteName::Leagues,
    RouteName::Predictions,
    RouteName::Favorites,
    RouteName::Comparison,
    RouteName::News,
    RouteName::Players,
    RouteName::Search,
    RouteName::Match,
    RouteName::Team,
    RouteName::Player,
    RouteName::League,
    RouteName::ComparisonResults,
];

impl RouteName {
    /// The matching rule for this route.
    pub const fn rule(self) -> RouteRule {
        match self {
            RouteName::Home => RouteRule::Literal(&["/", "/index"]),
            RouteName::Leagues => RouteRule::Literal(&["/leagues"]),
            RouteName::Predictions => RouteRule::Literal(&["/predictions"]),
            RouteName::Favorites => RouteRule::Literal(&["/favorites"]),
            RouteName::Comparison => RouteRule::Literal(&["/comparison", "/comparison/index"]),
            RouteName::News => RouteRule::Literal(&["/news"]),
            RouteName::Players => RouteRule::Literal(&["/players"]),
            RouteName::Search => RouteRule::Literal(&["/search"]),
            RouteName::Match => RouteRule::Detail("match"),
            RouteName::Team => RouteRule::Detail("team"),
            RouteName::Player => RouteRule::Detail("player"),
            RouteName::League => RouteRule::Detail("league"),
            RouteName::ComparisonResults => RouteRule::Literal(&["/comparison/results"]),
        }
    }

    /// Returns true if the normalized path belongs to this route.
    pub fn matches(self, path: &str) -> bool {
        self.rule().matches(path)
    }

    /// True for routes addressed as `/<segment>/<id>`.
    pub fn is_detail(self) -> bool {
        matches!(self.rule(), RouteRule::Detail(_))
    }

    /// Display label used in logs and metrics.
    pub const fn as_str(self) -> &'static str {
        match self {
            RouteName::Home => "home",
            RouteName::Leagues => "leagues",
            RouteName::Predictions => "predictions",
            RouteName::Favorites => "favorites",
            RouteName::Comparison => "comparison",
            RouteName::News => "news",
            RouteName::Players => "players",
            RouteName::Search => "search",
            RouteName::Match => "match",
            RouteName::Team => "team",
            RouteName::Player => "player",
            RouteName::League => "league",
            RouteName::ComparisonResults => "comparisonResults",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a route label is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route name: {0}")]
pub struct UnknownRouteName(pub String);

impl FromStr for RouteName {
    type Err = UnknownRouteName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROUTE_TABLE
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRouteName(s.to_string()))
    }
}
