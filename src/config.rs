// Configuration: where the library file lives. The tool takes no flags and
// reads no environment variables, so this only resolves a path.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File name of the backing JSON file.
pub const LIBRARY_FILE: &str = "library.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub library_path: PathBuf,
}

impl Config {
    /// Use `library.json` inside the current working directory, like running
    /// the tool from a project folder.
    pub fn from_cwd() -> Result<Self> {
        let dir = std::env::current_dir().context("Failed to resolve current directory")?;
        Ok(Self::in_dir(dir))
    }

    /// Use `library.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Config {
            library_path: dir.as_ref().join(LIBRARY_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_appends_library_file() {
        let cfg = Config::in_dir("/tmp/books");
        assert_eq!(cfg.library_path, PathBuf::from("/tmp/books/library.json"));
    }
}
