//! Mockstream HTTP gateway.
//!
//! Owns the listener, routing, and the realization of the core planner's
//! schedule as timed SSE output: one POST route, one `data:` frame per word,
//! 404 for everything else.

pub mod completions;
pub mod server;

pub use server::{GatewayState, build_router, start_server};
