//! Registry of named libraries
//!
//! The caller owns one registry and hands out access to the collection
//! behind each identifier. Each collection is independent and
//! exclusively owned; the registry itself never does I/O, persistence
//! is per collection.

use crate::collection::CollectionOfBooks;
use crate::error::{LibraryError, Result};
use std::collections::BTreeMap;

/// Maps a library identifier to its collection
#[derive(Debug, Default)]
pub struct LibraryRegistry {
    libraries: BTreeMap<String, CollectionOfBooks>,
}

impl LibraryRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new empty library under `name`
    ///
    /// Fails with [`LibraryError::LibraryExists`] when the identifier
    /// is already taken.
    pub fn create(&mut self, name: &str) -> Result<&mut CollectionOfBooks> {
        if self.libraries.contains_key(name) {
            return Err(LibraryError::LibraryExists(name.to_string()));
        }

        log::debug!("creating library '{}'", name);
        Ok(self.libraries.entry(name.to_string()).or_default())
    }

    /// Returns the collection registered under `name`
    pub fn get(&self, name: &str) -> Option<&CollectionOfBooks> {
        self.libraries.get(name)
    }

    /// Returns mutable access to the collection registered under `name`
    pub fn get_mut(&mut self, name: &str) -> Option<&mut CollectionOfBooks> {
        self.libraries.get_mut(name)
    }

    /// Removes the library and hands its collection back to the caller
    pub fn close(&mut self, name: &str) -> Option<CollectionOfBooks> {
        let removed = self.libraries.remove(name);
        if removed.is_some() {
            log::debug!("closed library '{}'", name);
        }
        removed
    }

    /// Returns the registered identifiers in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.libraries.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered libraries
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Returns true if no library is registered
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::{Author, Book};

    fn book(title: &str) -> Book {
        Book::new(
            "isbn".to_string(),
            title.to_string(),
            1,
            10.0,
            Author::new("Some Author".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_registry_starts_empty() {
        let registry = LibraryRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_create_and_get() {
        let mut registry = LibraryRegistry::new();
        registry.create("fiction").expect("Should create");

        assert!(registry.get("fiction").is_some());
        assert!(registry.get("nonfiction").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_duplicate_fails() {
        let mut registry = LibraryRegistry::new();
        registry.create("fiction").expect("Should create");

        let result = registry.create("fiction");
        assert!(matches!(result, Err(LibraryError::LibraryExists(name)) if name == "fiction"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_collections_are_independent() {
        let mut registry = LibraryRegistry::new();
        registry.create("a").expect("Should create");
        registry.create("b").expect("Should create");

        registry.get_mut("a").unwrap().add_book(book("Only in A"));

        assert_eq!(registry.get("a").unwrap().len(), 1);
        assert_eq!(registry.get("b").unwrap().len(), 0);
    }

    #[test]
    fn test_close_returns_collection() {
        let mut registry = LibraryRegistry::new();
        registry.create("fiction").expect("Should create");
        registry.get_mut("fiction").unwrap().add_book(book("Kept"));

        let closed = registry.close("fiction").expect("Should return collection");
        assert_eq!(closed.len(), 1);
        assert!(registry.get("fiction").is_none());
        assert!(registry.close("fiction").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = LibraryRegistry::new();
        registry.create("zoology").expect("Should create");
        registry.create("art").expect("Should create");
        registry.create("music").expect("Should create");

        assert_eq!(registry.names(), vec!["art", "music", "zoology"]);
    }
}
