//! Client-side routes.

use crate::path::{self, BROWSE_PREFIX};
use crate::query::SearchParams;

pub const LOGIN_PATH: &str = "/login";

/// Application route, parsed from a decoded pathname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`, and any path that is not otherwise recognized.
    Root,
    Login,
    /// `/browse` or `/browse/*`, with the wildcard as a canonical path.
    Browse { path: String },
}

impl AppRoute {
    pub fn parse(pathname: &str) -> Self {
        let trimmed = match pathname.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        if trimmed == LOGIN_PATH {
            return Self::Login;
        }

        match trimmed.strip_prefix(BROWSE_PREFIX) {
            Some("") => Self::Browse {
                path: "/".to_string(),
            },
            Some(rest) if rest.starts_with('/') => Self::Browse {
                path: path::normalize_path(rest),
            },
            _ => Self::Root,
        }
    }

    /// Directory path for browse routes.
    pub fn browse_path(&self) -> Option<&str> {
        match self {
            Self::Browse { path } => Some(path),
            _ => None,
        }
    }

    /// Encoded pathname for this route.
    pub fn to_path(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::Login => LOGIN_PATH.to_string(),
            Self::Browse { path } => path::browse_href(path),
        }
    }
}

/// A route together with its query parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub route: AppRoute,
    pub query: SearchParams,
}

impl Location {
    pub fn new(route: AppRoute, query: SearchParams) -> Self {
        Self { route, query }
    }

    /// Build from a decoded pathname and a raw `?`-prefixed search string.
    pub fn parse(pathname: &str, search: &str) -> Self {
        Self::new(AppRoute::parse(pathname), SearchParams::parse(search))
    }

    /// Full URL (pathname plus query).
    pub fn href(&self) -> String {
        format!("{}{}", self.route.to_path(), self.query.to_search())
    }
}
