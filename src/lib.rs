//! Greeting HTTP Server Library

pub mod config;
pub mod greetings;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use routing::RouteTable;
