// Server loop module
// Accepts connections forever, backing off on accept errors

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::logger;
use crate::routing::RouteTable;

/// First delay after a failed accept
const MIN_ACCEPT_BACKOFF: Duration = Duration::from_millis(5);
/// Upper bound for the accept retry delay
const MAX_ACCEPT_BACKOFF: Duration = Duration::from_secs(1);

/// Next accept retry delay: starts at 5ms, doubles, capped at 1s
pub fn next_backoff(current: Option<Duration>) -> Duration {
    match current {
        None => MIN_ACCEPT_BACKOFF,
        Some(delay) => std::cmp::min(delay * 2, MAX_ACCEPT_BACKOFF),
    }
}

/// Accept loop shared by every variant.
///
/// Runs until the process is terminated. Each accepted connection is served
/// on its own task; a failed accept is logged and retried after a backoff.
pub async fn start_server_loop(listener: TcpListener, routes: Arc<RouteTable>) {
    let mut backoff: Option<Duration> = None;

    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                backoff = None;
                handle_connection(stream, peer_addr, &routes);
            }
            Err(e) => {
                let delay = next_backoff(backoff);
                backoff = Some(delay);
                logger::log_accept_error(&e, delay);
                tokio::time::sleep(delay).await;
            }
        }
    }
}
