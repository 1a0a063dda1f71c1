//! Main router implementation.

use std::future::Future;
use std::sync::Arc;

use crate::error::{Result, RouterError};
use crate::middleware::{BoxFuture, Middleware, MiddlewareResult};
use crate::path::PathPattern;
use crate::request::{Method, Request};
use crate::response::Response;

/// A boxed async handler function.
pub type Handler = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// A single route definition.
#[derive(Clone)]
pub struct Route {
    /// HTTP method.
    pub method: Method,
    /// Path pattern.
    pub pattern: PathPattern,
    /// Request handler.
    pub handler: Handler,
}

impl Route {
    /// Creates a new route.
    pub fn new<F, Fut>(method: Method, pattern: &str, handler: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        Ok(Self {
            method,
            pattern: PathPattern::new(pattern)?,
            handler: Arc::new(move |req| Box::pin(handler(req))),
        })
    }
}

/// The main router for handling HTTP requests.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl Router {
    /// Creates a new empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a GET route.
    pub fn get<F, Fut>(self, path: &str, handler: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::Get, path, handler)
    }

    /// Adds a POST route.
    pub fn post<F, Fut>(self, path: &str, handler: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::Post, path, handler)
    }

    /// Adds a route with any method.
    pub fn route<F, Fut>(mut self, method: Method, path: &str, handler: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.routes.push(Route::new(method, path, handler)?);
        Ok(self)
    }

    /// Adds global middleware.
    #[must_use]
    pub fn middleware(mut self, mw: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(mw));
        self
    }

    /// Handles an incoming request.
    pub fn handle(&self, mut request: Request) -> BoxFuture<'_, Response> {
        Box::pin(async move {
            for mw in &self.middleware {
                match mw.before(&request).await {
                    MiddlewareResult::Continue(req) => request = req,
                    MiddlewareResult::Response(res) => {
                        // After-hooks still see short-circuited responses
                        let mut response = res;
                        for mw in self.middleware.iter().rev() {
                            response = mw.after(response).await;
                        }
                        return response;
                    }
                }
            }

            let mut response = match self.find_route(&request) {
                Ok(route) => (route.handler)(request).await,
                Err(RouterError::MethodNotAllowed { .. }) => Response::method_not_allowed(),
                Err(err) => {
                    tracing::debug!(error = %err, "no route");
                    Response::not_found()
                }
            };

            for mw in self.middleware.iter().rev() {
                response = mw.after(response).await;
            }

            response
        })
    }

    fn find_route(&self, request: &Request) -> Result<&Route> {
        let mut method_matched = false;

        for route in &self.routes {
            if route.pattern.match_path(&request.path) {
                method_matched = true;
                if route.method == request.method {
                    return Ok(route);
                }
            }
        }

        if method_matched {
            Err(RouterError::MethodNotAllowed {
                method: request.method.to_string(),
                path: request.path.clone(),
            })
        } else {
            Err(RouterError::NotFound {
                method: request.method.to_string(),
                path: request.path.clone(),
            })
        }
    }
}
