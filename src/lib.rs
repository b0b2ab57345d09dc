//! # bookstock
//!
//! An in-memory book inventory with:
//! - Atomic, invariant-preserving stock updates under concurrent access
//! - JSON snapshot persistence (open / sync)
//! - An HTTP API and a blocking client
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   GET /v1/...   ┌─────────────────────────────┐
//! │    Client    │ ──────────────▶ │        HTTP Server          │
//! │  (blocking)  │ ◀────────────── │   (route table, dispatch)   │
//! └──────────────┘   JSON / 404    └──────────────┬──────────────┘
//!                                                 │
//!                                  ┌──────────────▼──────────────┐
//!                                  │           Catalog           │
//!                                  │  RwLock<BTreeMap<ID, Book>> │
//!                                  └──────────────┬──────────────┘
//!                                                 │ open / sync
//!                                                 ▼
//!                                  ┌─────────────────────────────┐
//!                                  │      catalog.json file      │
//!                                  └─────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod catalog;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CatalogError, Result};
pub use config::Config;
pub use catalog::{Book, Catalog};
pub use network::{Client, Server};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of bookstock
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
