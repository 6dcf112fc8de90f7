//! An ordered, mutable collection of books

use bookshelf_core::Book;
use std::fmt;

/// The ordered list of [`Book`]s backing one library
///
/// Insertion order is preserved until [`sort_books`](Self::sort_books)
/// is called. There is no uniqueness constraint: the same ISBN, the
/// same title, or an equal book may appear any number of times, and
/// the search and removal operations are defined accordingly.
#[derive(Debug, Clone, Default)]
pub struct CollectionOfBooks {
    books: Vec<Book>,
}

impl CollectionOfBooks {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of books currently in the collection
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the collection holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns a snapshot copy of the book list
    ///
    /// The internal list stays owned by the collection; mutating the
    /// returned vector has no effect on it.
    pub fn books(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Appends a book to the end of the collection
    ///
    /// Duplicates are not checked.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Returns every book whose title contains `text`
    ///
    /// Matching is a case-sensitive substring check. The empty string
    /// is a substring of every title, so an empty query returns the
    /// whole collection.
    pub fn find_by_title(&self, text: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| book.title().contains(text))
            .cloned()
            .collect()
    }

    /// Returns every book whose ISBN contains `text`
    ///
    /// Matching is a case-sensitive substring check, same as
    /// [`find_by_title`](Self::find_by_title).
    pub fn find_by_isbn(&self, text: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| book.isbn().contains(text))
            .cloned()
            .collect()
    }

    /// Returns the books with an author whose name contains `text`
    ///
    /// A book is pushed once per matching author: a book whose two
    /// authors both match appears twice in the result.
    pub fn find_by_author(&self, text: &str) -> Vec<Book> {
        let mut matches = Vec::new();
        for book in &self.books {
            for author in book.authors() {
                if author.name().contains(text) {
                    matches.push(book.clone());
                }
            }
        }
        matches
    }

    /// Removes the first book equal to `book`
    ///
    /// Equality is the book's value equality. Returns false when no
    /// element matched.
    pub fn remove_book(&mut self, book: &Book) -> bool {
        match self.books.iter().position(|b| b == book) {
            Some(index) => {
                self.books.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the first book whose title matches `title` exactly,
    /// ignoring ASCII case
    ///
    /// Stops at the first match; later books with the same title are
    /// left in place. Returns false when nothing matched.
    pub fn remove_by_title(&mut self, title: &str) -> bool {
        match self
            .books
            .iter()
            .position(|b| b.title().eq_ignore_ascii_case(title))
        {
            Some(index) => {
                self.books.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sorts the collection in place by title
    ///
    /// The sort is stable: books with identical titles keep their
    /// relative order.
    pub fn sort_books(&mut self) {
        self.books.sort_by(Book::cmp_by_title);
    }

    pub(crate) fn as_slice(&self) -> &[Book] {
        &self.books
    }

    pub(crate) fn replace(&mut self, books: Vec<Book>) {
        self.books = books;
    }
}

impl fmt::Display for CollectionOfBooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for book in &self.books {
            write!(f, "{}", book)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::Author;

    fn book(isbn: &str, title: &str) -> Book {
        Book::new(
            isbn.to_string(),
            title.to_string(),
            1,
            10.0,
            Author::new("Some Author".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let collection = CollectionOfBooks::new();
        assert_eq!(collection.len(), 0);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_add_book_appends() {
        let mut collection = CollectionOfBooks::new();
        collection.add_book(book("1", "First"));
        collection.add_book(book("2", "Second"));

        assert_eq!(collection.len(), 2);
        let books = collection.books();
        assert_eq!(books[0].title(), "First");
        assert_eq!(books[1].title(), "Second");
    }

    #[test]
    fn test_add_book_allows_duplicates() {
        let mut collection = CollectionOfBooks::new();
        collection.add_book(book("1", "Same"));
        collection.add_book(book("1", "Same"));

        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_books_returns_snapshot() {
        let mut collection = CollectionOfBooks::new();
        collection.add_book(book("1", "Kept"));

        let mut snapshot = collection.books();
        snapshot.clear();

        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_remove_book_absent() {
        let mut collection = CollectionOfBooks::new();
        collection.add_book(book("1", "Present"));

        assert!(!collection.remove_book(&book("2", "Absent")));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_remove_book_removes_first_match_only() {
        let mut collection = CollectionOfBooks::new();
        collection.add_book(book("1", "Twin"));
        collection.add_book(book("1", "Twin"));

        assert!(collection.remove_book(&book("1", "Twin")));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_display_concatenates_books_in_order() {
        let mut collection = CollectionOfBooks::new();
        collection.add_book(book("1", "First"));
        collection.add_book(book("2", "Second"));

        let expected = format!("{}{}", book("1", "First"), book("2", "Second"));
        assert_eq!(collection.to_string(), expected);
    }

    #[test]
    fn test_display_empty_collection() {
        let collection = CollectionOfBooks::new();
        assert_eq!(collection.to_string(), "");
    }
}
