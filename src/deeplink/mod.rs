//! Deep link subsystem.
//!
//! # Data Flow
//! ```text
//! raw link ("futbolapp://match/123", "https://futbolapp.com/news/", "players")
//!     → normalize.rs (classify shape, extract path)
//!     → parser.rs (ParsedLink { path, is_valid } via routing)
//!     → dispatcher.rs (placeholder filter, Navigator call)
//!
//! Outgoing:
//!     RouteName + id → share.rs → custom-scheme / universal link
//! ```
//!
//! # Design Decisions
//! - Every stage is a pure function except the final Navigator call
//! - Failures degrade to "do nothing and report", never a panic

pub mod dispatcher;
pub mod normalize;
pub mod parser;
pub mod share;
pub mod types;

pub use dispatcher::{Dispatcher, Navigator};
pub use normalize::{classify, extract_path, normalize_path};
pub use parser::{parse_deep_link, try_parse_deep_link};
pub use share::{route_path, share_link, universal_link};
pub use types::{LinkError, LinkKind, LinkResult, NavigationError, ParsedLink};
