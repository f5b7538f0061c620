//! Authentication redirect policy.
//!
//! A browse route visited without a session detours through `/login`,
//! carrying the requested path in `r` and its serialized query in `p`.
//! After logging in the pair is turned back into the browse URL.

use crate::path::{self, BROWSE_PREFIX};
use crate::query::{SearchParams, params};
use crate::route::{AppRoute, LOGIN_PATH, Location};

/// What the router should do for a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(AppRoute),
    /// Replace the current history entry with this URL.
    Redirect(String),
}

/// `/login` URL preserving `path` and `query`. Each parameter is attached
/// only when non-empty.
pub fn login_redirect_url(path: &str, query: &SearchParams) -> String {
    let mut preserved = SearchParams::default();

    let relative = path.trim_start_matches('/');
    if !relative.is_empty() {
        preserved.set(params::REDIRECT_PATH, relative);
    }

    let serialized = query.to_string();
    if !serialized.is_empty() {
        preserved.set(params::REDIRECT_QUERY, &serialized);
    }

    format!("{}{}", LOGIN_PATH, preserved.to_search())
}

/// Browse URL reconstructed from a login URL's `r` and `p` parameters,
/// defaulting to the browse root.
pub fn browse_redirect_url(login_query: &SearchParams) -> String {
    let path = path::normalize_path(login_query.get(params::REDIRECT_PATH).unwrap_or(""));
    let mut url = path::browse_href(&path);

    if let Some(search) = login_query
        .get(params::REDIRECT_QUERY)
        .filter(|p| !p.is_empty())
    {
        url.push('?');
        url.push_str(search);
    }

    url
}

/// Decide whether `location` renders or redirects.
pub fn resolve(location: &Location, authed: bool) -> RouteDecision {
    match &location.route {
        AppRoute::Root => RouteDecision::Redirect(if authed {
            BROWSE_PREFIX.to_string()
        } else {
            LOGIN_PATH.to_string()
        }),
        AppRoute::Login if authed => {
            RouteDecision::Redirect(browse_redirect_url(&location.query))
        }
        AppRoute::Browse { path } if !authed => {
            RouteDecision::Redirect(login_redirect_url(path, &location.query))
        }
        route => RouteDecision::Render(route.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_redirect_for_path_only() {
        assert_eq!(
            login_redirect_url("/test-dir", &SearchParams::default()),
            "/login?r=test-dir"
        );
    }

    #[test]
    fn test_login_redirect_omits_empty_parameters() {
        assert_eq!(login_redirect_url("/", &SearchParams::default()), "/login");

        let query = SearchParams::parse("s=name:asc");
        assert_eq!(login_redirect_url("/", &query), "/login?p=s%3Dname%253Aasc");
    }

    #[test]
    fn test_browse_redirect_from_preserved_parameters() {
        let login = SearchParams::parse("?r=test-dir&p=s%3Dname%3Aasc");
        assert_eq!(browse_redirect_url(&login), "/browse/test-dir?s=name:asc");
    }

    #[test]
    fn test_browse_redirect_accepts_leading_slash() {
        let login = SearchParams::parse("r=%2Ftest-dir");
        assert_eq!(browse_redirect_url(&login), "/browse/test-dir");
    }

    #[test]
    fn test_browse_redirect_defaults_to_root() {
        assert_eq!(browse_redirect_url(&SearchParams::default()), "/browse");
        assert_eq!(browse_redirect_url(&SearchParams::parse("p=")), "/browse");
    }

    #[test]
    fn test_redirect_round_trip() {
        let query = SearchParams::parse("s=size%3Adesc&q=report");
        let login_url = login_redirect_url("/a/b c", &query);

        let (_, login_search) = login_url.split_once('?').unwrap();
        let back = browse_redirect_url(&SearchParams::parse(login_search));

        assert_eq!(back, format!("/browse/a/b%20c?{}", query));
    }

    #[test]
    fn test_resolve_root() {
        let root = Location::parse("/", "?q=ignored");
        assert_eq!(resolve(&root, true), RouteDecision::Redirect("/browse".into()));
        assert_eq!(resolve(&root, false), RouteDecision::Redirect("/login".into()));
    }

    #[test]
    fn test_resolve_unauthenticated_browse() {
        let location = Location::parse("/browse/test-dir", "");
        assert_eq!(
            resolve(&location, false),
            RouteDecision::Redirect("/login?r=test-dir".into())
        );
        assert_eq!(
            resolve(&location, true),
            RouteDecision::Render(location.route.clone())
        );
    }

    #[test]
    fn test_resolve_login() {
        let location = Location::parse("/login", "?r=test-dir&p=s%3Dname%3Aasc");
        assert_eq!(
            resolve(&location, true),
            RouteDecision::Redirect("/browse/test-dir?s=name:asc".into())
        );
        assert_eq!(resolve(&location, false), RouteDecision::Render(AppRoute::Login));
    }
}
