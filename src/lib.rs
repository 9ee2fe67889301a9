//! Minimal fixed-reply HTTP responders.
//!
//! Shared plumbing for the `version`, `version-banner` and `hello-group`
//! binaries: each binds port 8000, logs one startup line and answers a few
//! exact paths with constant plain-text bodies.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
pub mod variants;

use std::process::ExitCode;
use std::sync::Arc;

pub use routing::RouteTable;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Process entry shared by the binaries: serve `routes`, and on a startup
/// failure log one error line and exit non-zero.
pub fn main_for(routes: RouteTable) -> ExitCode {
    match run(routes) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Serve `routes` on the configured address until the process is killed.
///
/// Returns only when startup fails, e.g. when the port is already in use.
pub fn run(routes: RouteTable) -> Result<(), Error> {
    let cfg = config::Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg, routes))
}

async fn async_main(cfg: config::Config, routes: RouteTable) -> Result<(), Error> {
    let addr = cfg.get_socket_addr()?;

    let listener = server::create_listener(addr)
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    logger::log_server_start(&listener.local_addr()?);
    server::start_server_loop(listener, Arc::new(routes)).await;
    Ok(())
}
