//! # Storage Traits
//!
//! This module defines the storage abstraction trait that allows different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use crate::domain::models::expense::Expense as DomainExpense;

/// Trait defining the interface for expense storage operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the domain layer to work with different backends (CSV files,
/// databases, in-memory fakes) without modification. All operations are
/// synchronous.
pub trait ExpenseStorage: Send + Sync {
    /// Read the full persisted collection, in storage order.
    /// A missing file is an empty collection, not an error.
    fn load_expenses(&self) -> Result<Vec<DomainExpense>>;

    /// Serialize the full collection, overwriting the previous contents
    /// entirely.
    fn save_expenses(&self, expenses: &[DomainExpense]) -> Result<()>;
}
