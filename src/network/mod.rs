//! Network Module
//!
//! HTTP server and client for remote catalog access.
//!
//! ## Architecture
//! - axum router on a tokio runtime, one route per path shape
//! - Handlers decode the path and dispatch to the shared `Catalog`
//! - Blocking client used by the CLI

mod client;
mod handlers;
mod server;

pub use client::Client;
pub use handlers::{dispatch, dispatch_path, error_response};
pub use server::{router, Server};
