//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store registered routes in registration order
//! - Look up the matching route for a request method and path
//! - Invoke the matched handler and return its body
//! - Return explicit no-match rather than a silent default
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over routes (two routes here; precedence by
//!   registration order matters more than lookup speed)
//! - Handlers are pure: parameters in, body string out

use axum::http::Method;

use crate::routing::pattern::{PathParams, PathPattern};

/// A route handler: computes a response body from captured parameters.
pub type Handler = Box<dyn Fn(&PathParams) -> String + Send + Sync>;

/// Outcome of dispatching a request against the route table.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A route matched; the handler produced this body.
    Body(String),
    /// No registered route matched the method and path.
    NoMatch,
}

struct Route {
    method: Method,
    pattern: PathPattern,
    handler: Handler,
}

/// An ordered table of routes, built at startup and immutable after.
#[derive(Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Registration order determines precedence when
    /// patterns overlap: the first match wins.
    pub fn register<H>(&mut self, method: Method, pattern: &str, handler: H)
    where
        H: Fn(&PathParams) -> String + Send + Sync + 'static,
    {
        self.routes.push(Route {
            method,
            pattern: PathPattern::parse(pattern),
            handler: Box::new(handler),
        });
    }

    /// Find the first route matching the method and path and invoke
    /// its handler.
    pub fn dispatch(&self, method: &Method, path: &str) -> Dispatch {
        for route in &self.routes {
            if &route.method != method {
                continue;
            }
            if let Some(params) = route.pattern.match_path(path) {
                return Dispatch::Body((route.handler)(&params));
            }
        }
        Dispatch::NoMatch
    }
}
