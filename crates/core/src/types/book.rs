//! Book domain model

use crate::error::CoreError;
use crate::types::{Author, Validator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A catalogued book
///
/// The constructor is the single enforcement point for the field
/// invariants: isbn and title non-empty, edition and price
/// non-negative, at least one author. The setters are deliberately
/// unchecked and can take the fields outside those bounds afterwards;
/// see `CollectionOfBooks::restore` in `bookshelf-library` for how
/// such books are reported when they come back off disk.
///
/// The ISBN is an opaque identifier. It is not required to be unique
/// within a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    isbn: String,
    title: String,
    edition: i32,
    price: f64,
    authors: Vec<Author>,
}

impl Book {
    /// Creates a new book seeded with a single author
    ///
    /// Fails with [`CoreError::InvalidArgument`] when isbn or title is
    /// empty, or edition or price is negative.
    pub fn new(
        isbn: String,
        title: String,
        edition: i32,
        price: f64,
        author: Author,
    ) -> crate::error::Result<Self> {
        if isbn.is_empty() {
            return Err(CoreError::invalid_argument("isbn", "must not be empty"));
        }
        if title.is_empty() {
            return Err(CoreError::invalid_argument("title", "must not be empty"));
        }
        if edition < 0 {
            return Err(CoreError::invalid_argument(
                "edition",
                "must not be negative",
            ));
        }
        if price < 0.0 {
            return Err(CoreError::invalid_argument("price", "must not be negative"));
        }

        Ok(Self {
            isbn,
            title,
            edition,
            price,
            authors: vec![author],
        })
    }

    /// Returns the ISBN
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Replaces the ISBN
    pub fn set_isbn(&mut self, isbn: String) {
        self.isbn = isbn;
    }

    /// Returns the title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Returns the edition
    pub fn edition(&self) -> i32 {
        self.edition
    }

    /// Replaces the edition
    pub fn set_edition(&mut self, edition: i32) {
        self.edition = edition;
    }

    /// Returns the price
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Replaces the price
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Appends a new author with the given name
    ///
    /// No deduplication and no validation of the name.
    pub fn add_author(&mut self, name: String) {
        self.authors.push(Author::new(name));
    }

    /// Returns a snapshot copy of the author list
    ///
    /// The internal list stays owned by the book; mutating the
    /// returned vector has no effect on it.
    pub fn authors(&self) -> Vec<Author> {
        self.authors.clone()
    }

    /// Returns the author names joined with a comma separator
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(Author::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Compares two books by title alone
    ///
    /// Titles compare with the natural `str` ordering (case-sensitive,
    /// by code point). Books with identical titles compare equal here
    /// regardless of their other fields.
    pub fn cmp_by_title(&self, other: &Self) -> Ordering {
        self.title.cmp(&other.title)
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.isbn.is_empty() {
            errors.push("ISBN cannot be empty".to_string());
        }

        if self.title.is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if self.edition < 0 {
            errors.push("Edition cannot be negative".to_string());
        }

        if self.price < 0.0 {
            errors.push("Price cannot be negative".to_string());
        }

        if self.authors.is_empty() {
            errors.push("Book must have at least one author".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ISBN: {}, Title: {}, Edition: {}, Price: {}, Authors: {}",
            self.isbn,
            self.title,
            self.edition,
            self.price,
            self.author_names()
        )
    }
}
