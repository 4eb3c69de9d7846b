// Store: loads and saves the library as a JSON array in a single file.
// There is no atomic write; the file is overwritten in place.

use crate::error::StoreError;
use crate::model::Library;
use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Handle on the backing file. Cheap to clone; it only holds the path.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the library from disk. A missing file is an empty library; any
    /// other failure is returned to the caller.
    pub fn load(&self) -> Result<Library, StoreError> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no library file at {}, starting empty", self.path.display());
                return Ok(Library::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let library: Library = serde_json::from_str(&data).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!("loaded {} books from {}", library.len(), self.path.display());
        Ok(library)
    }

    /// Overwrite the backing file with the whole library, indented by four
    /// spaces.
    pub fn save(&self, library: &Library) -> Result<(), StoreError> {
        let json = to_json(library)?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("saved {} books to {}", library.len(), self.path.display());
        Ok(())
    }
}

/// `serde_json::to_string_pretty` indents by two, so build the writer by hand.
fn to_json(library: &Library) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    library.serialize(&mut ser).map_err(StoreError::Encode)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("library.json"));
        let lib = store.load().unwrap();
        assert!(lib.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("library.json"));
        let lib = Library::from(vec![
            Book::new("Dune", "Herbert"),
            Book::new("The Hobbit", "J.R.R. Tolkien"),
        ]);
        store.save(&lib).unwrap();
        assert_eq!(store.load().unwrap(), lib);
    }

    #[test]
    fn file_is_indented_by_four_spaces() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("library.json"));
        store
            .save(&Library::from(vec![Book::new("Dune", "Herbert")]))
            .unwrap();
        let text = std::fs::read_to_string(store.path()).unwrap();
        let expected = "[\n    {\n        \"title\": \"Dune\",\n        \"author\": \"Herbert\"\n    }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_library_saves_as_empty_array() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("library.json"));
        store.save(&Library::new()).unwrap();
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Store::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn reading_a_directory_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = Store::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("nope").join("library.json"));
        let err = store.save(&Library::new()).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }
}
