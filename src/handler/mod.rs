//! Request handler module
//!
//! Dispatches every request on its path alone to a fixed reply.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
