//! Logger module
//!
//! Lifecycle and error logging for the HTTP responder:
//! - the single startup line announcing the listening port
//! - listener and connection failures
//!
//! Requests themselves are not logged.

mod format;

pub use format::{stamp, stamp_at};

use std::io::{self, Write};
use std::net::SocketAddr;
use std::time::Duration;

/// Write one stamped line to `out`
fn write_to<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", stamp(message))
}

/// Write to the log sink (stderr, for lifecycle and error lines alike)
fn write_log(message: &str) {
    let _ = write_to(&mut io::stderr().lock(), message);
}

/// Startup line for a listener bound on `addr`
pub fn server_start_line(addr: &SocketAddr) -> String {
    format!("Listening on port {}...", addr.port())
}

pub fn log_server_start(addr: &SocketAddr) {
    write_log(&server_start_line(addr));
}

pub fn log_accept_error(err: &std::io::Error, retry_in: Duration) {
    write_log(&format!(
        "[ERROR] Accept error: {err}; retrying in {}ms",
        retry_in.as_millis()
    ));
}

pub fn log_connection_error(peer_addr: &SocketAddr, err: &impl std::fmt::Debug) {
    write_log(&format!(
        "[ERROR] Failed to serve connection from {peer_addr}: {err:?}"
    ));
}

pub fn log_error(message: &str) {
    write_log(&format!("[ERROR] {message}"));
}
