//! # CSV Storage Module
//!
//! File-based storage implementation for the expense tracker. The whole
//! collection lives in a single `expenses.csv` rewritten on every change,
//! next to a `config.yaml` holding tracker configuration.
//!
//! ## File Format
//!
//! ```csv
//! amount,category,date,timestamp
//! 12.5,Food,2024-01-05,2024-01-05T18:30:00+00:00
//! 7.25,Transport,2024-01-06,2024-01-06T08:10:00+00:00
//! ```

pub mod config_repository;
pub mod connection;
pub mod expense_repository;

#[cfg(test)]
pub mod test_utils;

pub use config_repository::{ConfigRepository, TrackerConfig};
pub use connection::CsvConnection;
pub use expense_repository::ExpenseRepository;
