//! Catalog snapshot file
//!
//! The whole store is one JSON object keyed by book ID:
//! ```text
//! {
//!   "abc": { "ID": "abc", "Title": "...", "Author": "...", "Copies": 1 },
//!   ...
//! }
//! ```
//! No versioning and no atomic replace: a crash mid-write can leave a
//! truncated file behind.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::Book;
use crate::error::Result;

/// Read a full keyed store from `path`
pub fn read_snapshot(path: &Path) -> Result<BTreeMap<String, Book>> {
    let file = File::open(path)?;
    let books = serde_json::from_reader(BufReader::new(file))?;
    Ok(books)
}

/// Write the full keyed store to `path`, replacing any existing file
pub fn write_snapshot(path: &Path, books: &BTreeMap<String, Book>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, books)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
