//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Normalized path ("/match/123")
//!     → router.rs (validate / resolve)
//!     → matcher.rs (evaluate per-route rules)
//!     → Return: RouteMatch or no match
//! ```
//!
//! # Design Decisions
//! - Route table is static and immutable
//! - No regex (literal compare + digit scan)
//! - Deterministic: same path always resolves to the same route

pub mod matcher;
pub mod router;

pub use matcher::{RouteName, RouteRule, ROUTE_TABLE};
pub use router::{is_valid_route, resolve_route, route_label, RouteMatch};
