// Session: the in-memory library together with the store it came from.
// Commands receive a session explicitly instead of touching global state.

use crate::config::Config;
use crate::error::StoreError;
use crate::model::Library;
use crate::store::Store;

#[derive(Debug)]
pub struct Session {
    pub(crate) library: Library,
    pub(crate) store: Store,
}

impl Session {
    /// Load the library once from `store`. Fails only on a read or parse
    /// error; a missing file gives an empty session.
    pub fn open(store: Store) -> Result<Self, StoreError> {
        let library = store.load()?;
        Ok(Session { library, store })
    }

    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Self::open(Store::new(config.library_path.clone()))
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Write the current in-memory library to disk.
    pub fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.library)
    }
}
