//! Catalog Module
//!
//! In-memory inventory of book records.
//!
//! ## Responsibilities
//! - Own every `Book` behind a single RwLock
//! - Atomic read-modify-write of per-record copy counts
//! - Snapshot the whole store to a JSON file and restore it
//!
//! ## Data Structure Choice
//! A `BTreeMap<String, Book>` wrapped in a `parking_lot::RwLock`:
//! - Operations are O(log n) map accesses, so one coarse lock is enough
//! - Ordered keys give a stable listing and a stable file layout
//! - Readers get clones, never references into the map

mod book;
mod snapshot;
mod store;

pub use book::Book;
pub use snapshot::{read_snapshot, write_snapshot};
pub use store::Catalog;
