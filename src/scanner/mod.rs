mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for discovering content files to lint.
pub trait FileScanner {
    /// Collect every matching file under `root`.
    ///
    /// # Errors
    /// Returns an error if the directory walk fails.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
