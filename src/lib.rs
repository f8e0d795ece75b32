//! Deep link routing for the futbolapp mobile client.

pub mod config;
pub mod deeplink;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod source;

pub use config::LinkConfig;
pub use deeplink::{
    parse_deep_link, Dispatcher, LinkError, NavigationError, Navigator, ParsedLink,
};
pub use routing::{is_valid_route, RouteName};
