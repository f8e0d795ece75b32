//! Deep link parsing.
//!
//! # Responsibilities
//! - Turn a raw link into a `ParsedLink` (normalized path + validity)
//! - Contain malformed URLs locally instead of surfacing a fault
//!
//! # Design Decisions
//! - Pure: no I/O, no shared state, same input gives the same output
//! - Validity is computed on the final normalized path
//! - `try_parse_deep_link` keeps the failure reason for callers that
//!   need to tell "malformed" from "empty"

use crate::deeplink::normalize::normalize_path;
use crate::deeplink::types::{LinkError, LinkResult, ParsedLink};
use crate::routing::is_valid_route;

/// Parses a link, keeping the reason on failure.
pub fn try_parse_deep_link(url: &str) -> LinkResult<ParsedLink> {
    let path = normalize_path(url)?;
    let is_valid = is_valid_route(&path);
    Ok(ParsedLink { path, is_valid })
}

/// Parses a link, returning `None` for empty or unparseable input.
pub fn parse_deep_link(url: &str) -> Option<ParsedLink> {
    match try_parse_deep_link(url) {
        Ok(parsed) => Some(parsed),
        Err(LinkError::Empty) => None,
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Failed to parse deep link");
            None
        }
    }
}
