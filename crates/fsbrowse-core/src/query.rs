//! Query-string handling with `URLSearchParams` semantics.

use std::fmt;

use url::form_urlencoded;

use crate::view::{self, SortSpec};

/// Recognized query parameter names.
pub mod params {
    /// Sort, `<field>:<direction>`.
    pub const SORT: &str = "s";
    /// Filter term.
    pub const FILTER: &str = "q";
    /// Path to return to after logging in.
    pub const REDIRECT_PATH: &str = "r";
    /// Serialized query to return to after logging in.
    pub const REDIRECT_QUERY: &str = "p";
}

/// Ordered list of decoded key/value pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParams(Vec<(String, String)>);

impl SearchParams {
    /// Parse a query string, with or without its leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self(
            form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        )
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the first value for `key` and drop any others, appending
    /// when absent.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.0.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                self.0[idx].1 = value.to_string();
                let mut seen = 0;
                self.0.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.0.push((key.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validated sort spec from `s`.
    pub fn sort(&self) -> Option<SortSpec> {
        self.get(params::SORT).and_then(SortSpec::parse)
    }

    /// Normalized filter term from `q`.
    pub fn filter(&self) -> Option<String> {
        view::filter_term(self.get(params::FILTER))
    }

    /// Query with `s` set to `sort`, everything else untouched.
    pub fn with_sort(&self, sort: SortSpec) -> Self {
        let mut next = self.clone();
        next.set(params::SORT, &sort.to_string());
        next
    }

    /// Query produced by the search box: the trimmed term as `q` (dropped
    /// when blank) plus the current `s`, nothing else.
    pub fn for_filter(&self, term: &str) -> Self {
        let mut next = Self::default();
        let term = term.trim();
        if !term.is_empty() {
            next.set(params::FILTER, term);
        }
        if let Some(sort) = self.get(params::SORT) {
            next.set(params::SORT, sort);
        }
        next
    }

    /// `?`-prefixed query string, empty when there are no parameters.
    pub fn to_search(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("?{}", self)
        }
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.0 {
            serializer.append_pair(k, v);
        }
        f.write_str(&serializer.finish())
    }
}
