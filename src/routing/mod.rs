//! Routing module
//!
//! Exact-path multiplexer mapping fixed URL paths to fixed text bodies.

mod table;

pub use table::RouteTable;
