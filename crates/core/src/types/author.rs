//! Author domain model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single named author of a book
///
/// The name is stored exactly as supplied; nothing validates or
/// normalizes it. Two authors compare equal when their names match
/// ignoring ASCII case. The model never deduplicates on that basis,
/// the comparison exists for callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    name: String,
}

impl Author {
    /// Creates a new author with the given name
    pub fn new(name: String) -> Self {
        Self { name }
    }

    /// Returns the author's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the author's name unconditionally
    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
