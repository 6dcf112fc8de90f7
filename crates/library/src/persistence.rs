//! File persistence for book collections
//!
//! A collection is written as a single versioned JSON document, so a
//! file that does not hold a book list is rejected with a format error
//! instead of half-loading. Writes go through a temporary file and an
//! atomic rename; reads parse the whole document before any in-memory
//! state changes.

use crate::collection::CollectionOfBooks;
use crate::error::{LibraryError, Result};
use bookshelf_core::{Book, Validator};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use serde::{Deserialize, Serialize};

/// Current catalog file format version
pub const CATALOG_VERSION: u32 = 1;

#[derive(Serialize)]
struct CatalogDocumentRef<'a> {
    version: u32,
    books: &'a [Book],
}

#[derive(Deserialize)]
struct CatalogDocument {
    version: u32,
    books: Vec<Book>,
}

impl CollectionOfBooks {
    /// Serializes the whole ordered book list to `path`
    ///
    /// The document is written to a temporary file in the target
    /// directory and renamed into place, so an interrupted write never
    /// leaves a truncated catalog behind. All file handles are
    /// released on every exit path.
    pub fn persist<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        let document = CatalogDocumentRef {
            version: CATALOG_VERSION,
            books: self.as_slice(),
        };
        let json = serde_json::to_string_pretty(&document).map_err(LibraryError::Serialize)?;

        // A bare filename has an empty parent
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(dir)?;
        temp_file
            .write_all(json.as_bytes())
            .map_err(|e| LibraryError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        temp_file.flush().map_err(|e| LibraryError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
        temp_file.persist(path).map_err(|e| LibraryError::Write {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        log::info!("persisted {} book(s) to {}", self.len(), path.display());
        Ok(())
    }

    /// Replaces the collection with the contents of `path`
    ///
    /// The file is read and parsed completely before the in-memory
    /// list is touched; on any error the previous contents stay
    /// exactly as they were. There are no merge semantics, a
    /// successful restore always replaces the whole list.
    ///
    /// Books that fail the shape checks (files written after unchecked
    /// mutation can hold negative prices, empty titles, and so on) are
    /// still loaded, with a warning per offending book.
    pub fn restore<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|e| LibraryError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let document: CatalogDocument =
            serde_json::from_str(&contents).map_err(|e| LibraryError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        if document.version != CATALOG_VERSION {
            return Err(LibraryError::UnsupportedVersion {
                found: document.version,
                expected: CATALOG_VERSION,
            });
        }

        for (index, book) in document.books.iter().enumerate() {
            if let Err(errors) = book.validate() {
                log::warn!(
                    "book {} in {} fails shape checks: {}",
                    index,
                    path.display(),
                    errors.join("; ")
                );
            }
        }

        log::info!(
            "restored {} book(s) from {}",
            document.books.len(),
            path.display()
        );
        self.replace(document.books);
        Ok(())
    }
}
