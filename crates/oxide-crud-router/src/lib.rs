//! # oxide-crud-router
//!
//! HTTP plumbing for the CRUD admin handlers: request and response values,
//! query string and form body decoding, and a small async router with
//! middleware hooks.
//!
//! ## Quick Start
//!
//! ```ignore
//! use oxide_crud_router::{LoggingMiddleware, Request, Response, Router};
//!
//! async fn admin(req: Request) -> Response {
//!     let route = req.query_value("path").unwrap_or("home");
//!     Response::text(format!("route: {route}"))
//! }
//!
//! let router = Router::new()
//!     .get("/crud", admin)?
//!     .post("/crud", admin)?
//!     .middleware(LoggingMiddleware);
//!
//! let response = router.handle(Request::get("/crud")).await;
//! ```
//!
//! ## Inputs
//!
//! Handlers read parameters through [`Request::input`], which looks at the
//! decoded url-encoded body first and falls back to the query string.
//! [`Request::query_value`] reads the query string alone, for keys a posted
//! form must not override. Call [`Request::with_parsed_form`] after filling
//! in the raw body.

mod error;
mod middleware;
mod path;
mod request;
mod response;
mod router;

pub use error::{Result, RouterError};
pub use middleware::{BoxFuture, LoggingMiddleware, MethodFilter, Middleware, MiddlewareResult};
pub use path::PathPattern;
pub use request::{url_decode, url_encode, Method, Request};
pub use response::Response;
pub use router::{Handler, Route, Router};
