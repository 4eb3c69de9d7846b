// Command handlers: one function per menu action. Each takes the session
// plus whatever the user typed and returns an `Outcome` for the UI to
// render. Handlers never print; that keeps them testable without a terminal.

use crate::error::StoreError;
use crate::model::Book;
use crate::session::Session;
use log::{info, warn};
use std::fmt;

pub const EMPTY_LIBRARY: &str = "Your library is empty. Add some books!";
pub const MISSING_FIELDS: &str = "Please provide both title and author.";
pub const NO_RESULTS: &str = "No books found matching your search.";
pub const SEARCH_HEADING: &str = "Search Results:";
pub const SAVED: &str = "Library saved. You can close the app now.";

/// Result of running a command, ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A list of books, optionally introduced by a heading line.
    Books {
        heading: Option<&'static str>,
        books: Vec<Book>,
    },
    /// Neutral message such as an empty library or empty search.
    Info(String),
    /// The command changed or saved something.
    Success(String),
    /// User-visible validation or lookup failure. Nothing was changed.
    Error(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Books { heading, books } => {
                if let Some(h) = heading {
                    writeln!(f, "{}", h)?;
                }
                for (i, book) in books.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", book)?;
                }
                Ok(())
            }
            Outcome::Info(msg) | Outcome::Success(msg) | Outcome::Error(msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}

/// List every book in insertion order.
pub fn view(session: &Session) -> Outcome {
    if session.library.is_empty() {
        return Outcome::Info(EMPTY_LIBRARY.into());
    }
    Outcome::Books {
        heading: None,
        books: session.library.books().to_vec(),
    }
}

/// Append a book and save. Both fields must be non-empty and are stored as
/// typed, so `remove` matches the same text. If the save fails the book is
/// taken back out before the error is returned.
pub fn add(session: &mut Session, title: &str, author: &str) -> Result<Outcome, StoreError> {
    if title.is_empty() || author.is_empty() {
        return Ok(Outcome::Error(MISSING_FIELDS.into()));
    }

    session.library.push(Book::new(title, author));
    if let Err(e) = session.persist() {
        warn!("save failed, dropping '{}' from memory: {}", title, e);
        session.library.pop();
        return Err(e);
    }

    info!("added '{}' by {}", title, author);
    Ok(Outcome::Success(format!(
        "Added '{}' by {} to your library.",
        title, author
    )))
}

/// Remove the first book whose title matches ignoring case, then save. The
/// confirmation echoes the title as the user typed it.
pub fn remove(session: &mut Session, title: &str) -> Result<Outcome, StoreError> {
    let Some((idx, book)) = session.library.remove_first_by_title(title) else {
        return Ok(Outcome::Error(format!("'{}' not found in your library.", title)));
    };

    if let Err(e) = session.persist() {
        warn!("save failed, restoring '{}': {}", book.title, e);
        session.library.insert(idx, book);
        return Err(e);
    }

    info!("removed '{}' by {}", book.title, book.author);
    Ok(Outcome::Success(format!(
        "Removed '{}' from your library.",
        title
    )))
}

/// Books whose title or author contains `term`, ignoring case.
pub fn search(session: &Session, term: &str) -> Outcome {
    let results = session.library.search(term);
    if results.is_empty() {
        return Outcome::Info(NO_RESULTS.into());
    }
    Outcome::Books {
        heading: Some(SEARCH_HEADING),
        books: results,
    }
}

/// Save the whole library. Does not end the program; the caller decides.
pub fn save_and_exit(session: &Session) -> Result<Outcome, StoreError> {
    session.persist()?;
    info!("library saved ({} books)", session.library.len());
    Ok(Outcome::Success(SAVED.into()))
}
