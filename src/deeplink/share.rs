//! Outgoing link construction.
//!
//! Builds custom-scheme and universal links for a route so that shared
//! links always parse back to the same valid path.

use crate::config::schema::LinksConfig;
use crate::deeplink::types::{LinkError, LinkResult};
use crate::routing::matcher::{is_numeric_id, RouteName, RouteRule};

/// The canonical in-app path for a route.
pub fn route_path(route: RouteName, id: Option<&str>) -> LinkResult<String> {
    match (route.rule(), id) {
        (RouteRule::Detail(segment), Some(id)) if is_numeric_id(id) => {
            Ok(format!("/{segment}/{id}"))
        }
        (RouteRule::Detail(_), Some(id)) => Err(LinkError::InvalidId {
            route: route.as_str(),
            id: id.to_string(),
        }),
        (RouteRule::Detail(_), None) => Err(LinkError::MissingId(route.as_str())),
        (RouteRule::Literal(_), Some(_)) => Err(LinkError::UnexpectedId(route.as_str())),
        // First literal is canonical.
        (RouteRule::Literal(paths), None) => {
            Ok(paths.first().copied().unwrap_or("/").to_string())
        }
    }
}

/// `futbolapp://match/123`
pub fn share_link(route: RouteName, id: Option<&str>, links: &LinksConfig) -> LinkResult<String> {
    let path = route_path(route, id)?;
    Ok(format!("{}://{}", links.app_scheme, path.trim_start_matches('/')))
}

/// `https://futbolapp.com/match/123`
pub fn universal_link(
    route: RouteName,
    id: Option<&str>,
    links: &LinksConfig,
) -> LinkResult<String> {
    let path = route_path(route, id)?;
    Ok(format!("https://{}{}", links.universal_host, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deeplink::parser::parse_deep_link;
    use crate::routing::ROUTE_TABLE;

    #[test]
    fn test_detail_links() {
        let links = LinksConfig::default();
        assert_eq!(
            share_link(RouteName::Match, Some("123"), &links).unwrap(),
            "futbolapp://match/123"
        );
        assert_eq!(
            universal_link(RouteName::League, Some("9"), &links).unwrap(),
            "https://futbolapp.com/league/9"
        );
    }

    #[test]
    fn test_literal_links() {
        let links = LinksConfig::default();
        assert_eq!(share_link(RouteName::Home, None, &links).unwrap(), "futbolapp://");
        assert_eq!(
            universal_link(RouteName::ComparisonResults, None, &links).unwrap(),
            "https://futbolapp.com/comparison/results"
        );
    }

    #[test]
    fn test_id_errors() {
        assert_eq!(
            route_path(RouteName::Team, None).unwrap_err(),
            LinkError::MissingId("team")
        );
        assert_eq!(
            route_path(RouteName::Team, Some("x1")).unwrap_err(),
            LinkError::InvalidId {
                route: "team",
                id: "x1".into()
            }
        );
        assert_eq!(
            route_path(RouteName::News, Some("1")).unwrap_err(),
            LinkError::UnexpectedId("news")
        );
    }

    #[test]
    fn test_shared_links_parse_back() {
        let links = LinksConfig::default();
        for route in ROUTE_TABLE {
            let id = route.is_detail().then_some("42");
            let expected = route_path(*route, id).unwrap();
            for link in [
                share_link(*route, id, &links).unwrap(),
                universal_link(*route, id, &links).unwrap(),
            ] {
                let parsed = parse_deep_link(&link).unwrap();
                assert!(parsed.is_valid, "{link}");
                assert_eq!(parsed.path, expected);
            }
        }
    }
}
