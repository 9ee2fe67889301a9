//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Only the request path is read:
//! the method, headers, query and body never influence the reply.

use crate::http;
use crate::routing::RouteTable;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    routes: Arc<RouteTable>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(route_request(req.uri().path(), &routes))
}

/// Reply with the registered body or the stock 404
fn route_request(path: &str, routes: &RouteTable) -> Response<Full<Bytes>> {
    match routes.lookup(path) {
        Some(body) => http::build_text_response(body.clone()),
        None => http::build_404_response(),
    }
}
