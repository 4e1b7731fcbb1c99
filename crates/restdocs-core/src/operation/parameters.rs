//! Request parameters of a recorded operation.
//!
//! Parameters are the union of the query string and, for form submissions,
//! the URL-encoded request body. A name may carry several values.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Ordered mapping from parameter name to its values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, Vec<String>>);

impl Parameters {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse parameters from a query string (with or without a leading `?`).
    ///
    /// Values are percent-decoded and `+` is decoded as a space. A name that
    /// appears without `=` is recorded with an empty value.
    ///
    /// ```rust
    /// use restdocs_core::operation::Parameters;
    ///
    /// let params = Parameters::from_query_string("?page=2&size=10&tag=a&tag=b");
    /// assert_eq!(params.get("tag"), Some(&["a".to_string(), "b".to_string()][..]));
    /// assert_eq!(params.len(), 3);
    /// ```
    pub fn from_query_string(query: &str) -> Self {
        let mut params = Self::new();
        params.extend_from_urlencoded(query.strip_prefix('?').unwrap_or(query));
        params
    }

    /// Add the pairs of an `application/x-www-form-urlencoded` string.
    ///
    /// Pairs with an empty name (such as `=x`) are skipped and never observed.
    pub fn extend_from_urlencoded(&mut self, encoded: &str) {
        for (name, value) in url::form_urlencoded::parse(encoded.as_bytes()) {
            if name.is_empty() {
                continue;
            }
            self.add(name.into_owned(), value.into_owned());
        }
    }

    /// Append a value for `name`, keeping any values already present.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// Values recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The set of parameter names.
    pub fn names(&self) -> BTreeSet<String> {
        self.0.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.add(name, value);
        }
        params
    }
}
