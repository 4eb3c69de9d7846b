// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to run the interactive book catalog.
//
// Module responsibilities:
// - `model`: `Book` and `Library`, plain data plus list operations.
// - `store`: reads and writes the library as a JSON file.
// - `session`: the loaded library paired with its store.
// - `commands`: one handler per menu action, returning an `Outcome`.
// - `ui`: terminal menu and prompts; delegates to `commands`.
// - `config`, `error`: file location and typed store errors.
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod ui;

pub use commands::Outcome;
pub use config::Config;
pub use error::StoreError;
pub use model::{Book, Library};
pub use session::Session;
pub use store::Store;
