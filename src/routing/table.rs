//! Route table module
//!
//! A request path matches a route only when it is byte-for-byte equal to the
//! registered path. There is no prefix, trailing-slash or case folding.

use hyper::body::Bytes;
use std::collections::HashMap;

/// Immutable table of path to response body, built once at startup
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Bytes>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `body` as the reply for `path`
    ///
    /// Registering a path again replaces the earlier body.
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, body: impl Into<Bytes>) -> Self {
        self.routes.insert(path.into(), body.into());
        self
    }

    /// Find the body registered for `path`
    pub fn lookup(&self, path: &str) -> Option<&Bytes> {
        self.routes.get(path)
    }

    /// Registered paths, in no particular order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table() -> RouteTable {
        RouteTable::new()
            .route("/version", "2.0.1")
            .route("/", String::from("root"))
    }

    #[test]
    fn test_exact_match() {
        let table = make_table();
        assert_eq!(table.lookup("/version").unwrap(), "2.0.1");
        assert_eq!(table.lookup("/").unwrap(), "root");
    }

    #[test]
    fn test_no_prefix_or_folding() {
        let table = make_table();
        assert!(table.lookup("/version/").is_none());
        assert!(table.lookup("/version/x").is_none());
        assert!(table.lookup("/Version").is_none());
        assert!(table.lookup("/versions").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn test_uncleaned_paths_do_not_match() {
        let table = make_table();
        assert!(table.lookup("//version").is_none());
        assert!(table.lookup("/a/../version").is_none());
        assert!(table.lookup("/./version").is_none());
    }

    #[test]
    fn test_root_is_not_catch_all() {
        let table = make_table();
        assert!(table.lookup("/nonexistent").is_none());
    }

    #[test]
    fn test_later_registration_wins() {
        let table = RouteTable::new().route("/", "first").route("/", "second");
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("/").unwrap(), "second");
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::new();
        assert!(table.is_empty());
        assert!(table.lookup("/").is_none());
    }

    #[test]
    fn test_paths() {
        let table = make_table();
        let mut paths: Vec<&str> = table.paths().collect();
        paths.sort_unstable();
        assert_eq!(paths, vec!["/", "/version"]);
    }
}
