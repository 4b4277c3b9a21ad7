//! Persistent bookmark storage.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during bookmark storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to serialize JSON.
    #[error("Failed to serialize bookmarks: {0}")]
    SerializeJson(#[from] serde_json::Error),
}

/// Result type for bookmark storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Persists symbol and list bookmarks as JSON arrays on disk.
///
/// Two files live under the base directory: `symbols.json` holds bookmarked
/// ticker symbols, `lists.json` holds bookmarked watchlist group ids. Reads
/// are forgiving: a missing or corrupt file reads as an empty set, so a
/// damaged store never blocks the dashboard. Writes propagate errors.
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    base_path: PathBuf,
}

impl BookmarkStore {
    /// Creates a bookmark store rooted at the given directory.
    ///
    /// Creates the directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| StoreError::CreateDir {
                path: base_path.clone(),
                source: e,
            })?;
        }

        Ok(Self { base_path })
    }

    /// Returns the default path for owfin bookmark storage.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.local/share/owfin/`
    /// - macOS: `~/Library/Application Support/owfin/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\owfin\`
    ///
    /// Falls back to `~/.owfin/` if the platform-specific location cannot
    /// be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "owfin").map_or_else(dirs_fallback, |proj_dirs| {
            proj_dirs.data_dir().to_path_buf()
        })
    }

    /// Creates a bookmark store at the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn with_default_path() -> Result<Self> {
        Self::new(Self::default_path())
    }

    /// Returns the base path of the store.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of the symbol bookmarks file.
    #[must_use]
    pub fn symbols_path(&self) -> PathBuf {
        self.base_path.join("symbols.json")
    }

    /// Returns the path of the list bookmarks file.
    #[must_use]
    pub fn lists_path(&self) -> PathBuf {
        self.base_path.join("lists.json")
    }

    /// Returns the bookmarked symbols in insertion order.
    #[must_use]
    pub fn symbols(&self) -> Vec<String> {
        read_entries(&self.symbols_path())
    }

    /// Returns true if the symbol is bookmarked (case-insensitive).
    #[must_use]
    pub fn is_symbol_bookmarked(&self, symbol: &str) -> bool {
        if symbol.is_empty() {
            return false;
        }
        self.symbols()
            .iter()
            .any(|s| s.eq_ignore_ascii_case(symbol))
    }

    /// Replaces the bookmarked symbols.
    ///
    /// Entries are trimmed, blanks dropped, and duplicates removed while
    /// preserving first-seen order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn set_symbols<S: AsRef<str>>(&self, symbols: &[S]) -> Result<()> {
        write_entries(&self.symbols_path(), symbols)
    }

    /// Toggles a symbol bookmark, returning the new membership state.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn toggle_symbol(&self, symbol: &str) -> Result<bool> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Ok(false);
        }

        let current = self.symbols();
        let exists = current.iter().any(|s| s.eq_ignore_ascii_case(symbol));

        let next: Vec<String> = if exists {
            current
                .into_iter()
                .filter(|s| !s.eq_ignore_ascii_case(symbol))
                .collect()
        } else {
            let mut next = current;
            next.push(symbol.to_string());
            next
        };

        self.set_symbols(&next)?;
        Ok(!exists)
    }

    /// Returns the bookmarked watchlist group ids in insertion order.
    #[must_use]
    pub fn list_ids(&self) -> Vec<String> {
        read_entries(&self.lists_path())
    }

    /// Returns true if the watchlist group id is bookmarked.
    #[must_use]
    pub fn is_list_bookmarked(&self, list_id: &str) -> bool {
        if list_id.is_empty() {
            return false;
        }
        self.list_ids().iter().any(|id| id == list_id)
    }

    /// Replaces the bookmarked watchlist group ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn set_list_ids<S: AsRef<str>>(&self, list_ids: &[S]) -> Result<()> {
        write_entries(&self.lists_path(), list_ids)
    }

    /// Toggles a watchlist bookmark, returning the new membership state.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn toggle_list(&self, list_id: &str) -> Result<bool> {
        let list_id = list_id.trim();
        if list_id.is_empty() {
            return Ok(false);
        }

        let current = self.list_ids();
        let exists = current.iter().any(|id| id == list_id);

        let next: Vec<String> = if exists {
            current.into_iter().filter(|id| id != list_id).collect()
        } else {
            let mut next = current;
            next.push(list_id.to_string());
            next
        };

        self.set_list_ids(&next)?;
        Ok(!exists)
    }
}

/// Reads a JSON string array, treating missing or damaged files as empty.
fn read_entries(path: &Path) -> Vec<String> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(&content) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Warning: ignoring corrupt bookmark file {:?}: {}", path, e);
            Vec::new()
        }
    }
}

/// Writes entries as a pretty JSON array, normalized and deduplicated.
fn write_entries<S: AsRef<str>>(path: &Path, entries: &[S]) -> Result<()> {
    let mut normalized: Vec<&str> = Vec::new();
    for entry in entries {
        let trimmed = entry.as_ref().trim();
        if !trimmed.is_empty() && !normalized.contains(&trimmed) {
            normalized.push(trimmed);
        }
    }

    let json = serde_json::to_string_pretty(&normalized)?;
    fs::write(path, json).map_err(|e| StoreError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Fallback for determining the home directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".owfin")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, BookmarkStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = BookmarkStore::new(temp_dir.path().join("bookmarks")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_store_creates_base_dir() {
        let (_tmp, store) = store();
        assert!(store.base_path().exists());
    }

    #[test]
    fn test_empty_store_reads_empty() {
        let (_tmp, store) = store();
        assert!(store.symbols().is_empty());
        assert!(store.list_ids().is_empty());
        assert!(!store.is_symbol_bookmarked("AAPL"));
    }

    #[test]
    fn test_set_symbols_normalizes() {
        let (_tmp, store) = store();
        store
            .set_symbols(&[" AAPL ", "", "NVDA", "AAPL", "  "])
            .unwrap();
        assert_eq!(store.symbols(), vec!["AAPL", "NVDA"]);
    }

    #[test]
    fn test_toggle_symbol_roundtrip() {
        let (_tmp, store) = store();

        assert!(store.toggle_symbol("THYAO.IS").unwrap());
        assert!(store.is_symbol_bookmarked("thyao.is"));

        assert!(!store.toggle_symbol("THYAO.IS").unwrap());
        assert!(!store.is_symbol_bookmarked("THYAO.IS"));
    }

    #[test]
    fn test_toggle_symbol_case_insensitive_removal() {
        let (_tmp, store) = store();
        store.set_symbols(&["GC=F"]).unwrap();

        assert!(!store.toggle_symbol("gc=f").unwrap());
        assert!(store.symbols().is_empty());
    }

    #[test]
    fn test_toggle_blank_symbol_is_noop() {
        let (_tmp, store) = store();
        assert!(!store.toggle_symbol("   ").unwrap());
        assert!(store.symbols().is_empty());
    }

    #[test]
    fn test_list_bookmarks_are_exact_match() {
        let (_tmp, store) = store();
        store.set_list_ids(&["fx"]).unwrap();

        assert!(store.is_list_bookmarked("fx"));
        assert!(!store.is_list_bookmarked("FX"));
    }

    #[test]
    fn test_toggle_list_roundtrip() {
        let (_tmp, store) = store();

        assert!(store.toggle_list("equities").unwrap());
        assert!(store.toggle_list("fx").unwrap());
        assert_eq!(store.list_ids(), vec!["equities", "fx"]);

        assert!(!store.toggle_list("equities").unwrap());
        assert_eq!(store.list_ids(), vec!["fx"]);
    }

    #[test]
    fn test_corrupt_file_reads_empty() {
        let (_tmp, store) = store();
        fs::write(store.symbols_path(), "{not json").unwrap();
        assert!(store.symbols().is_empty());
    }

    #[test]
    fn test_symbol_and_list_files_are_separate() {
        let (_tmp, store) = store();
        store.set_symbols(&["AAPL"]).unwrap();
        store.set_list_ids(&["fx"]).unwrap();

        assert_eq!(store.symbols(), vec!["AAPL"]);
        assert_eq!(store.list_ids(), vec!["fx"]);
        assert!(store.symbols_path() != store.lists_path());
    }
}
