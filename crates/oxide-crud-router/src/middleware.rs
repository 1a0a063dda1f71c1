//! Middleware support for request/response processing.

use std::future::Future;
use std::pin::Pin;

use crate::request::Request;
use crate::response::Response;

/// A boxed future for async middleware operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result of middleware processing.
pub enum MiddlewareResult {
    /// Continue to the next middleware/handler.
    Continue(Request),
    /// Stop processing and return this response.
    Response(Response),
}

/// Trait for middleware that processes requests and responses.
///
/// Middleware can modify the request before it reaches the handler,
/// short-circuit with its own response, or rewrite the handler's response.
pub trait Middleware: Send + Sync {
    /// Called before the request handler.
    fn before<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, MiddlewareResult>;

    /// Called after the request handler.
    fn after<'a>(&'a self, res: Response) -> BoxFuture<'a, Response>;
}

/// Middleware that logs each request and response status via `tracing`.
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn before<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, MiddlewareResult> {
        Box::pin(async move {
            let route = req.query_value("path").unwrap_or("");
            tracing::info!(method = %req.method, path = %req.path, route, "-->");
            MiddlewareResult::Continue(req.clone())
        })
    }

    fn after<'a>(&'a self, res: Response) -> BoxFuture<'a, Response> {
        Box::pin(async move {
            tracing::info!(status = res.status, bytes = res.body.len(), "<--");
            res
        })
    }
}

/// Middleware that only lets requests through for an allow-list of methods.
///
/// The CRUD endpoints are reached with `GET` and `POST` only.
pub struct MethodFilter {
    allowed: Vec<crate::request::Method>,
}

impl MethodFilter {
    /// Creates a filter accepting the given methods.
    pub fn new(allowed: &[crate::request::Method]) -> Self {
        Self {
            allowed: allowed.to_vec(),
        }
    }

    fn allows(&self, method: crate::request::Method) -> bool {
        self.allowed.contains(&method)
    }
}

impl Middleware for MethodFilter {
    fn before<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, MiddlewareResult> {
        Box::pin(async move {
            if self.allows(req.method) {
                MiddlewareResult::Continue(req.clone())
            } else {
                tracing::warn!(method = %req.method, path = %req.path, "method rejected");
                MiddlewareResult::Response(Response::method_not_allowed())
            }
        })
    }

    fn after<'a>(&'a self, res: Response) -> BoxFuture<'a, Response> {
        Box::pin(async move { res })
    }
}
