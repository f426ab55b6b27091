//! Path management for the expense ledger
//!
//! The ledger lives in a single JSON file. Unless a path is given on the
//! command line it is `./data/expenses.json`, relative to the working
//! directory. The directory is created on the first save.

use std::path::{Path, PathBuf};

/// Default location of the storage file
pub const DEFAULT_DATA_FILE: &str = "data/expenses.json";

/// Resolves the storage file used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    data_file: PathBuf,
}

impl LedgerPaths {
    /// Use the given data file, or the default when none is supplied
    pub fn new(data_file: Option<PathBuf>) -> Self {
        Self {
            data_file: data_file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
        }
    }

    /// Path to the storage file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Directory containing the storage file, if it has one
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Whether the storage file has been written yet
    pub fn is_initialized(&self) -> bool {
        self.data_file.exists()
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_data_file() {
        let paths = LedgerPaths::default();
        assert_eq!(paths.data_file(), Path::new("data/expenses.json"));
        assert_eq!(paths.data_dir(), Some(Path::new("data")));
    }

    #[test]
    fn test_custom_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("ledger.json");
        let paths = LedgerPaths::new(Some(file.clone()));

        assert_eq!(paths.data_file(), file.as_path());
        assert_eq!(paths.data_dir(), Some(temp_dir.path()));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_bare_file_name_has_no_dir() {
        let paths = LedgerPaths::new(Some(PathBuf::from("expenses.json")));
        assert_eq!(paths.data_dir(), None);
    }
}
