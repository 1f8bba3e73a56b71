//! Greeting route handlers.
//!
//! # Responsibilities
//! - Produce the fixed greeting for `GET /`
//! - Echo the captured `name` parameter for `GET /hello/:name`
//! - Build the route table wiring patterns to handlers

use axum::http::Method;

use crate::routing::{PathParams, RouteTable};

/// Body for `GET /`.
pub fn hello_world(_params: &PathParams) -> String {
    "Hello world!".to_string()
}

/// Body for `GET /hello/:name`. The captured segment is interpolated
/// as-is: no validation, decoding, or escaping.
pub fn hello_name(params: &PathParams) -> String {
    let name = params.get("name").unwrap_or_default();
    format!("Hello {name}!")
}

/// Build the route table for the greeting server.
pub fn routes() -> RouteTable {
    let mut table = RouteTable::new();
    table.register(Method::GET, "/", hello_world);
    table.register(Method::GET, "/hello/:name", hello_name);
    table
}
