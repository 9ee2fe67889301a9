//! The three responder variants
//!
//! Each variant is its own binary; they share nothing but these constants and
//! the serving plumbing.

use crate::routing::RouteTable;

/// Version reported by every variant
pub const VERSION: &str = "2.0.1";

/// Root reply of the user-group variant
pub const GREETING: &str = "Hello User Group!!!";

/// `GET /version` only
pub fn version_only() -> RouteTable {
    RouteTable::new().route("/version", VERSION)
}

/// `GET /version` plus a root page announcing the version
pub fn version_banner() -> RouteTable {
    RouteTable::new()
        .route("/version", VERSION)
        .route("/", format!("Current version: {VERSION}"))
}

/// `GET /version` plus the user-group greeting at the root
pub fn hello_group() -> RouteTable {
    RouteTable::new()
        .route("/version", VERSION)
        .route("/", GREETING)
}
