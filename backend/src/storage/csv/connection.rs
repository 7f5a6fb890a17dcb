use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// CsvConnection manages the data directory and the file paths inside it.
///
/// The connection is an explicit value handed to repositories; there is no
/// process-wide default instance.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the file path for the expense collection
    pub fn expenses_file_path(&self) -> PathBuf {
        self.base_directory.join("expenses.csv")
    }

    /// Get the file path for the tracker configuration
    pub fn config_file_path(&self) -> PathBuf {
        self.base_directory.join("config.yaml")
    }
}
