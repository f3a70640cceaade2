//! Path management for tally-cli
//!
//! Resolves where the ledger file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `TALLY_DATA_DIR` environment variable (if set)
//! 2. The platform data directory (XDG on Linux, Application Support on
//!    macOS, AppData on Windows) under `tally-cli`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TallyError;

/// Manages all paths used by tally-cli
#[derive(Debug, Clone)]
pub struct TallyPaths {
    /// Directory holding the ledger file
    data_dir: PathBuf,
}

impl TallyPaths {
    /// Create a new TallyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TallyError> {
        Self::resolve(std::env::var("TALLY_DATA_DIR").ok())
    }

    // Env reading stays in new() so tests can exercise the override
    // without touching process-global state.
    fn resolve(override_dir: Option<String>) -> Result<Self, TallyError> {
        let data_dir = match override_dir {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "tally-cli")
                .ok_or_else(|| {
                    TallyError::Config("Could not determine a data directory".into())
                })?
                .data_dir()
                .to_path_buf(),
        };

        Ok(Self { data_dir })
    }

    /// Create TallyPaths with a custom data directory (useful for testing)
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the data directory
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Get the path to the ledger file
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir.join("ledger.json")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), TallyError> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| TallyError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }
}
