//! # Tracker Config Repository
//!
//! File-based configuration storage using a single YAML file `config.yaml`
//! at the root of the data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! suggested_categories:
//!   - Food
//!   - Transport
//! data_format_version: "1.0"
//! created_at: "2025-01-21T19:30:00Z"
//! updated_at: "2025-01-21T19:35:00Z"
//! ```

use anyhow::Result;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::connection::CsvConnection;

/// Tracker configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Category labels a front end may offer in its picker. Suggestions
    /// only: the store accepts any free-text category.
    pub suggested_categories: Vec<String>,
    /// Data format version for future migrations
    pub data_format_version: String,
    /// When the config was first created
    pub created_at: String,
    /// When the config was last updated
    pub updated_at: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            suggested_categories: ["Food", "Transport", "Entertainment", "Shopping", "Bills", "Other"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            data_format_version: "1.0".to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// YAML-backed tracker config repository
#[derive(Clone)]
pub struct ConfigRepository {
    connection: CsvConnection,
}

impl ConfigRepository {
    /// Create a new config repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn config_path(&self) -> PathBuf {
        self.connection.config_file_path()
    }

    /// Load the config from file, creating and persisting the default if it
    /// doesn't exist.
    pub fn get_config(&self) -> Result<TrackerConfig> {
        let config_path = self.config_path();

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)?;
            let config: TrackerConfig = serde_yaml::from_str(&yaml_content)?;
            debug!("Loaded tracker config from {:?}", config_path);
            Ok(config)
        } else {
            let config = TrackerConfig::default();
            self.save_config(&config)?;
            info!("Created default tracker config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Replace the stored config, refreshing its `updated_at` stamp.
    pub fn update_config(&self, config: &TrackerConfig) -> Result<TrackerConfig> {
        let mut updated = config.clone();
        updated.updated_at = Utc::now().to_rfc3339();
        self.save_config(&updated)?;
        Ok(updated)
    }

    fn save_config(&self, config: &TrackerConfig) -> Result<()> {
        let config_path = self.config_path();
        let yaml_content = serde_yaml::to_string(config)?;

        // Atomic write pattern: write to temp file, then rename
        let temp_path = config_path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &config_path)?;

        debug!("Saved tracker config to {:?}", config_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestHelper;

    #[test]
    fn test_creates_default_config_on_first_access() -> Result<()> {
        let helper = TestHelper::new()?;

        let config = helper.config_repo.get_config()?;
        assert_eq!(config.suggested_categories.len(), 6);
        assert!(config.suggested_categories.contains(&"Food".to_string()));
        assert!(helper.env.connection.config_file_path().exists());
        Ok(())
    }

    #[test]
    fn test_update_round_trips() -> Result<()> {
        let helper = TestHelper::new()?;

        let mut config = helper.config_repo.get_config()?;
        config.suggested_categories.push("Travel".to_string());
        helper.config_repo.update_config(&config)?;

        let reloaded = helper.config_repo.get_config()?;
        assert!(reloaded.suggested_categories.contains(&"Travel".to_string()));
        Ok(())
    }
}
