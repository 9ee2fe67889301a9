// 连接处理模块
// 处理单个 TCP 连接的服务

use std::net::SocketAddr;
use std::sync::Arc;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::handler;
use crate::logger;
use crate::routing::RouteTable;

/// Serve a single connection in its own task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Serves HTTP/1.1 (keep-alive on) with the request handler
/// 3. Logs the connection error, if any, with the peer address
///
/// There is no timeout: the connection lives until the peer closes it.
///
/// # Arguments
///
/// * `stream` - The accepted TCP stream
/// * `peer_addr` - The peer's socket address
/// * `routes` - Shared route table
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    routes: &Arc<RouteTable>,
) {
    let routes = Arc::clone(routes);
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&routes))),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&peer_addr, &err);
        }
    });
}
