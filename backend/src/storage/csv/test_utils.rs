/// Test utilities module for consistent storage test infrastructure
///
/// This module provides RAII-based cleanup that guarantees test data is
/// removed even if tests panic or fail.

use anyhow::Result;
use chrono::Utc;
use tempfile::TempDir;

use super::config_repository::ConfigRepository;
use super::connection::CsvConnection;
use super::expense_repository::ExpenseRepository;
use crate::domain::models::expense::Expense as DomainExpense;

/// Test environment that provides a temporary data directory and connection
/// that will be automatically cleaned up when the environment is dropped,
/// even if tests panic or fail.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// Test helper that provides repository instances for a test environment
pub struct TestHelper {
    pub env: TestEnvironment,
    pub expense_repo: ExpenseRepository,
    pub config_repo: ConfigRepository,
}

impl TestHelper {
    /// Create a new test helper with a fresh environment
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;
        let expense_repo = ExpenseRepository::new(env.connection.clone());
        let config_repo = ConfigRepository::new(env.connection.clone());

        Ok(Self {
            env,
            expense_repo,
            config_repo,
        })
    }
}

/// Build an expense with a fixed RFC 3339 timestamp so bucket keys are
/// stable in assertions.
pub fn expense(amount: f64, category: &str, date: &str, timestamp: &str) -> DomainExpense {
    DomainExpense {
        amount,
        category: category.to_string(),
        date: date.to_string(),
        timestamp: chrono::DateTime::parse_from_rfc3339(timestamp)
            .expect("test timestamp must be RFC 3339")
            .with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
            // Environment dropped here
        }
        assert!(!base_path.exists());
        Ok(())
    }
}
