//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (ordered route scan)
//!     → pattern.rs (segment match, parameter capture)
//!     → Return: handler body or NoMatch
//!
//! Route Compilation (at startup):
//!     register(method, pattern, handler)
//!     → Compile pattern into segments
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins (registration order)

pub mod pattern;
pub mod router;

pub use pattern::{PathParams, PathPattern};
pub use router::{Dispatch, RouteTable};
