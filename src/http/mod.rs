//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, request ID)
//!     → routing layer (route table dispatch)
//!     → handler body written as plain-text response
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
