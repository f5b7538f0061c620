//! Directory path normalization and browse-link construction.
//!
//! Canonical paths have exactly one leading slash and no trailing slash,
//! except the root `/` itself.

use url::form_urlencoded;

/// Prefix of every browse route.
pub const BROWSE_PREFIX: &str = "/browse";

/// Normalize a raw route segment into a canonical absolute path.
pub fn normalize_path(raw: &str) -> String {
    let mut path = format!("/{}", raw.trim_start_matches('/'));
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

/// Non-empty segments of a path.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Path of a direct child of `parent`.
pub fn child_path(parent: &str, name: &str) -> String {
    if parent == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), name)
    }
}

/// Percent-encode a single path segment (spaces become `%20`).
pub fn encode_segment(segment: &str) -> String {
    // `+` only appears here as the encoding of a space; a literal plus is
    // already escaped to `%2B`.
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Browse URL for a directory path.
pub fn browse_href(path: &str) -> String {
    let mut href = String::from(BROWSE_PREFIX);
    for segment in segments(path) {
        href.push('/');
        href.push_str(&encode_segment(segment));
    }
    href
}

/// One breadcrumb entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

/// Breadcrumb trail for a path: `Home` followed by one crumb per segment,
/// each linking to the cumulative path.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let parts = segments(path);
    let mut crumbs = Vec::with_capacity(parts.len() + 1);
    crumbs.push(Crumb {
        label: "Home".to_string(),
        href: BROWSE_PREFIX.to_string(),
    });

    for idx in 0..parts.len() {
        crumbs.push(Crumb {
            label: parts[idx].to_string(),
            href: browse_href(&parts[..=idx].join("/")),
        });
    }

    crumbs
}
