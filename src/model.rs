// Domain model: a book record and the ordered library that holds them.
// Everything here is plain data plus list operations, no I/O.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single book entry. There is no id: books are identified by title when
/// removing, compared case-insensitively.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Book {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Case-insensitive substring match against title or author.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.author.to_lowercase().contains(&term)
    }
}

impl fmt::Display for Book {
    /// Renders as `title by author`, the form used in every listing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// Ordered collection of books. Insertion order is display order and the
/// JSON form is a bare array, so `transparent` keeps the file shape simple.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Append a book at the end. No duplicate detection.
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Drop the last book. Used to undo a `push` whose save failed.
    pub fn pop(&mut self) -> Option<Book> {
        self.books.pop()
    }

    /// Position of the first book whose title equals `title`, ignoring case.
    pub fn position_of_title(&self, title: &str) -> Option<usize> {
        let wanted = title.to_lowercase();
        self.books
            .iter()
            .position(|b| b.title.to_lowercase() == wanted)
    }

    /// Remove and return the first book with a matching title (ignoring
    /// case), together with its former index.
    pub fn remove_first_by_title(&mut self, title: &str) -> Option<(usize, Book)> {
        let idx = self.position_of_title(title)?;
        Some((idx, self.books.remove(idx)))
    }

    /// Put a book back at `index`, used to undo a removal.
    pub fn insert(&mut self, index: usize, book: Book) {
        let index = index.min(self.books.len());
        self.books.insert(index, book);
    }

    /// All books whose title or author contains `term`, ignoring case. An
    /// empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<Book> {
        self.books.iter().filter(|b| b.matches(term)).cloned().collect()
    }
}

impl From<Vec<Book>> for Library {
    fn from(books: Vec<Book>) -> Self {
        Library { books }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Library {
        Library::from(vec![
            Book::new("The Hobbit", "J.R.R. Tolkien"),
            Book::new("1984", "Orwell"),
            Book::new("Dune", "Herbert"),
        ])
    }

    #[test]
    fn display_is_title_by_author() {
        assert_eq!(Book::new("Dune", "Herbert").to_string(), "Dune by Herbert");
    }

    #[test]
    fn search_matches_author_ignoring_case() {
        let hits = sample().search("tolkien");
        assert_eq!(hits, vec![Book::new("The Hobbit", "J.R.R. Tolkien")]);
    }

    #[test]
    fn search_matches_title_substring() {
        let hits = sample().search("HOB");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "The Hobbit");
    }

    #[test]
    fn empty_search_term_matches_everything() {
        assert_eq!(sample().search("").len(), 3);
    }

    #[test]
    fn remove_takes_only_first_duplicate() {
        let mut lib = Library::from(vec![
            Book::new("Dune", "Herbert"),
            Book::new("dune", "Someone Else"),
        ]);
        let (idx, removed) = lib.remove_first_by_title("DUNE").unwrap();
        assert_eq!(idx, 0);
        assert_eq!(removed.author, "Herbert");
        assert_eq!(lib.books(), &[Book::new("dune", "Someone Else")]);
    }

    #[test]
    fn remove_requires_exact_title() {
        let mut lib = sample();
        assert!(lib.remove_first_by_title("Hobbit").is_none());
        assert_eq!(lib.len(), 3);
    }

    #[test]
    fn insert_restores_original_order() {
        let mut lib = sample();
        let (idx, book) = lib.remove_first_by_title("1984").unwrap();
        lib.insert(idx, book);
        assert_eq!(lib, sample());
    }

    #[test]
    fn serializes_as_bare_array() {
        let lib = Library::from(vec![Book::new("Dune", "Herbert")]);
        let json = serde_json::to_string(&lib).unwrap();
        assert_eq!(json, r#"[{"title":"Dune","author":"Herbert"}]"#);
    }
}
