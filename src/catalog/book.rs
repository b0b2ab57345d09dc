//! Book record
//!
//! Single-record value type stored by the catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A book and the number of copies in stock
///
/// Serialized with the field names `ID`, `Title`, `Author` and `Copies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    #[serde(rename = "ID")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub copies: u64,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        copies: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            copies,
        }
    }

    /// Set the copy count, rejecting negative values without touching `self`
    pub fn set_copies(&mut self, copies: i64) -> Result<()> {
        let copies = u64::try_from(copies).map_err(|_| {
            CatalogError::Validation(format!("negative number of copies: {}", copies))
        })?;
        self.copies = copies;
        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (copies: {})", self.title, self.author, self.copies)
    }
}
