//! BookShelf library management
//!
//! Everything above the leaf domain types lives here: the ordered
//! [`CollectionOfBooks`] with its search and sort operations, file
//! persistence for whole collections, and the [`LibraryRegistry`]
//! mapping library identifiers to their collections.
//!
//! The presentation layer driving these types owns all user
//! interaction and validates raw input into well-formed books before
//! adding them. This crate surfaces every failure as a
//! [`LibraryError`] and never retries; the caller decides what to do
//! next.

mod collection;
mod error;
mod persistence;
mod registry;

pub use collection::CollectionOfBooks;
pub use error::{LibraryError, Result};
pub use persistence::CATALOG_VERSION;
pub use registry::LibraryRegistry;
