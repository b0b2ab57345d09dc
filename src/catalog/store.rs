//! Catalog implementation
//!
//! BTreeMap-based store with a single RwLock for concurrency.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::{read_snapshot, write_snapshot, Book};
use crate::error::{CatalogError, Result};

/// Concurrency-safe keyed store of books
///
/// ## Concurrency Model: Single RwLock over the whole map
///
/// - **Reads** (`get_all_books`, `get_book`, `get_copies`, `sync`): shared lock,
///   any number run concurrently
/// - **Writes** (`add_book`, `add_copies`, `sub_copies`, `set_copies`): exclusive
///   lock held across the whole read-validate-write sequence
///
/// Every failed write returns before touching the map, so a caller never sees
/// a partially applied mutation. Reads hand out clones.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Book ID → Book, the only shared mutable state
    books: RwLock<BTreeMap<String, Book>>,

    /// File used by `sync`
    path: Option<PathBuf>,
}

impl Catalog {
    /// Create an empty catalog with no backing file
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON snapshot
    ///
    /// The returned catalog syncs back to the same `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let books = read_snapshot(path)?;

        tracing::debug!("Opened catalog {} with {} books", path.display(), books.len());

        Ok(Self {
            books: RwLock::new(books),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open `path` if it exists, otherwise start empty and sync to `path` later
    pub fn open_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            tracing::info!("No catalog at {}, starting empty", path.display());
            Ok(Self::new().with_path(path))
        }
    }

    /// Bind the catalog to a backing file
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Change the backing file
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Snapshot of every stored book, ordered by ID
    pub fn get_all_books(&self) -> Vec<Book> {
        self.books.read().values().cloned().collect()
    }

    /// Look up a book by ID
    pub fn get_book(&self, id: &str) -> Option<Book> {
        self.books.read().get(id).cloned()
    }

    /// Insert a new book; an existing ID is never overwritten
    pub fn add_book(&self, book: Book) -> Result<()> {
        let mut books = self.books.write();
        if books.contains_key(&book.id) {
            return Err(CatalogError::AlreadyExists(book.id));
        }
        books.insert(book.id.clone(), book);
        Ok(())
    }

    /// Increase the copy count of `id` by `copies`, returning the new total
    ///
    /// A negative `copies` is applied as-is, but the total can never drop
    /// below zero.
    pub fn add_copies(&self, id: &str, copies: i64) -> Result<u64> {
        let mut books = self.books.write();
        let book = books
            .get_mut(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let total = i128::from(book.copies) + i128::from(copies);
        book.copies = Self::checked_total(id, book.copies, total, copies.saturating_neg())?;
        Ok(book.copies)
    }

    /// Decrease the copy count of `id` by `copies`, returning the new total
    ///
    /// Fails with `InsufficientStock` when fewer than `copies` are on hand;
    /// removing exactly the available stock is allowed.
    pub fn sub_copies(&self, id: &str, copies: i64) -> Result<u64> {
        let mut books = self.books.write();
        let book = books
            .get_mut(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let total = i128::from(book.copies) - i128::from(copies);
        book.copies = Self::checked_total(id, book.copies, total, copies)?;
        Ok(book.copies)
    }

    /// Current copy count of `id`
    pub fn get_copies(&self, id: &str) -> Result<u64> {
        self.books
            .read()
            .get(id)
            .map(|book| book.copies)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Set the copy count of `id`, rejecting negative values
    pub fn set_copies(&self, id: &str, copies: i64) -> Result<()> {
        let mut books = self.books.write();
        let book = books
            .get_mut(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        book.set_copies(copies)
    }

    /// Write the whole catalog to its backing file
    ///
    /// Holds the shared lock while writing, so the file is a consistent
    /// snapshot and writers wait until it is done.
    pub fn sync(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or(CatalogError::NoBackingFile)?;

        let books = self.books.read();
        write_snapshot(path, &books)?;

        tracing::debug!("Synced {} books to {}", books.len(), path.display());
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.read().is_empty()
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Validate a computed total before it is stored
    fn checked_total(id: &str, available: u64, total: i128, requested: i64) -> Result<u64> {
        if total < 0 {
            return Err(CatalogError::InsufficientStock {
                id: id.to_string(),
                available,
                requested,
            });
        }
        u64::try_from(total).map_err(|_| {
            CatalogError::Validation(format!("copy count overflow for {:?}", id))
        })
    }
}
