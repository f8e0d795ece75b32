//! Path normalization for incoming links.
//!
//! # Responsibilities
//! - Classify a raw link as custom scheme, universal link, or bare path
//! - Extract the in-app path from each shape
//! - Enforce the path invariant: one leading `/`, no trailing `/`
//!
//! # Design Decisions
//! - Universal links go through the `url` crate; host is dropped
//! - Query and fragment are dropped from every shape
//! - A `://` that does not follow a valid scheme is a malformed absolute
//!   URL, never a bare path
//! - Normalization is total over non-empty input apart from `Malformed`

use url::Url;

use crate::deeplink::types::{LinkError, LinkKind, LinkResult};

const SCHEME_SEPARATOR: &str = "://";

/// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Determines the shape of a raw link.
pub fn classify(raw: &str) -> LinkResult<LinkKind> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LinkError::Empty);
    }
    // A `://` inside a query string does not make a bare path absolute.
    let Some(idx) = strip_query(raw).find(SCHEME_SEPARATOR) else {
        return Ok(LinkKind::BarePath);
    };
    let scheme = &raw[..idx];
    if !is_scheme(scheme) {
        return Err(LinkError::Malformed {
            url: raw.to_string(),
            reason: format!("invalid scheme '{scheme}'"),
        });
    }
    if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
        Ok(LinkKind::Universal)
    } else {
        Ok(LinkKind::CustomScheme)
    }
}

/// Extracts and normalizes the in-app path of a raw link.
pub fn normalize_path(raw: &str) -> LinkResult<String> {
    let raw = raw.trim();
    let path = match classify(raw)? {
        LinkKind::Universal => {
            let url = Url::parse(raw).map_err(|e| LinkError::Malformed {
                url: raw.to_string(),
                reason: e.to_string(),
            })?;
            url.path().to_string()
        }
        LinkKind::CustomScheme => {
            let rest = raw
                .split_once(SCHEME_SEPARATOR)
                .map(|(_, rest)| rest)
                .unwrap_or_default();
            strip_query(rest).to_string()
        }
        LinkKind::BarePath => strip_query(raw).to_string(),
    };
    Ok(finish(&path))
}

/// Query and fragment never take part in routing, for any link shape.
fn strip_query(s: &str) -> &str {
    let end = s.find(['?', '#']).unwrap_or(s.len());
    &s[..end]
}

/// Same as [`normalize_path`], discarding the failure reason.
pub fn extract_path(raw: &str) -> Option<String> {
    normalize_path(raw).ok()
}

/// Applies the leading/trailing slash post-condition.
fn finish(path: &str) -> String {
    let trimmed = path.trim_start_matches('/').trim_end_matches('/');
    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push('/');
    out.push_str(trimmed);
    out
}
