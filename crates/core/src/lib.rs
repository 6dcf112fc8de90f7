//! BookShelf domain core
//!
//! Leaf types for the catalog: [`Author`], [`Book`], the
//! construction-time validation error, and the [`Validator`] trait for
//! non-fatal shape checks. Collection management and persistence live
//! in `bookshelf-library`.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{Author, Book, Validator};
