//! Key-value lookup over decoded query parameters.
//!
//! Parsers take anything implementing [`QueryParams`] so they stay independent
//! of the HTTP layer that decoded the query string.

use std::collections::{BTreeMap, HashMap};

/// Query parameter key for the pagination offset.
pub const PARAM_OFFSET: &str = "offset";

/// Query parameter key for the pagination limit.
pub const PARAM_LIMIT: &str = "limit";

/// Query parameter key for the import row filter.
pub const PARAM_FILTER: &str = "filter";

/// Read access to decoded query parameters by key.
pub trait QueryParams {
    /// Return the value for `key`, or `None` when the parameter is absent.
    fn get_param(&self, key: &str) -> Option<&str>;
}

impl<S: std::hash::BuildHasher> QueryParams for HashMap<String, String, S> {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl QueryParams for BTreeMap<String, String> {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// First match wins when a key is repeated.
impl<K: AsRef<str>, V: AsRef<str>> QueryParams for [(K, V)] {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl<T: QueryParams + ?Sized> QueryParams for &T {
    fn get_param(&self, key: &str) -> Option<&str> {
        (**self).get_param(key)
    }
}
