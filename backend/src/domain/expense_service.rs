//! Expense store: the single source of truth for the expense collection
//! and its durable representation.

use chrono::Utc;
use log::{info, warn};

use crate::domain::commands::expenses::{AddExpenseCommand, DeleteExpenseCommand};
use crate::domain::models::expense::{Expense, ExpenseError};
use crate::storage::traits::ExpenseStorage;

/// Owns the canonical in-memory collection plus the storage backend that
/// persists it. Mutating operations take `&mut self`; a front end that adds
/// threads must wrap the service in its own mutual exclusion, since the
/// backing file has no locking protocol.
pub struct ExpenseService<S: ExpenseStorage> {
    storage: S,
    expenses: Vec<Expense>,
}

impl<S: ExpenseStorage> ExpenseService<S> {
    /// Create a service backed by `storage`, loading whatever the backing
    /// file currently holds.
    pub fn new(storage: S) -> Self {
        let mut service = Self {
            storage,
            expenses: Vec::new(),
        };
        service.reload();
        service
    }

    /// Re-read the collection from storage, best effort.
    ///
    /// A missing file starts the collection empty. So does any read or
    /// parse failure: the file is fully regenerable from the next save, so
    /// nothing is surfaced to callers. This silent recovery is the
    /// documented contract, not an accident.
    pub fn reload(&mut self) {
        self.expenses = match self.storage.load_expenses() {
            Ok(expenses) => {
                info!("Loaded {} expenses from storage", expenses.len());
                expenses
            }
            Err(e) => {
                warn!("Failed to load expenses, starting empty: {}", e);
                Vec::new()
            }
        };
    }

    /// Record a new expense and persist the whole collection.
    ///
    /// The raw amount text must parse as a number and none of the fields
    /// may be blank (whitespace-only counts as blank). On success the
    /// created record, with its generated timestamp, is appended and
    /// returned. A failed save is rolled back so the in-memory collection
    /// keeps mirroring the file.
    pub fn add_expense(&mut self, command: AddExpenseCommand) -> Result<Expense, ExpenseError> {
        let amount_text = command.amount.trim();
        if amount_text.is_empty() {
            return Err(ExpenseError::MissingField("amount"));
        }
        let amount: f64 = amount_text
            .parse()
            .map_err(|_| ExpenseError::InvalidAmount(command.amount.clone()))?;

        let category = command.category.trim();
        if category.is_empty() {
            return Err(ExpenseError::MissingField("category"));
        }
        let date = command.date.trim();
        if date.is_empty() {
            return Err(ExpenseError::MissingField("date"));
        }

        let expense = Expense {
            amount,
            category: category.to_string(),
            date: date.to_string(),
            timestamp: Utc::now(),
        };

        self.expenses.push(expense.clone());
        if let Err(e) = self.storage.save_expenses(&self.expenses) {
            self.expenses.pop();
            return Err(ExpenseError::Storage(e));
        }

        info!(
            "Recorded expense: {} in {} on {}",
            expense.amount, expense.category, expense.date
        );
        Ok(expense)
    }

    /// Delete the expense at the given zero-based position and persist.
    ///
    /// Returns the removed record; later entries shift down by one. A
    /// failed save is rolled back, as with `add_expense`.
    pub fn delete_expense(&mut self, command: DeleteExpenseCommand) -> Result<Expense, ExpenseError> {
        if command.index >= self.expenses.len() {
            return Err(ExpenseError::IndexOutOfRange {
                index: command.index,
                len: self.expenses.len(),
            });
        }

        let removed = self.expenses.remove(command.index);
        if let Err(e) = self.storage.save_expenses(&self.expenses) {
            self.expenses.insert(command.index, removed);
            return Err(ExpenseError::Storage(e));
        }

        info!(
            "Deleted expense at position {}: {} in {}",
            command.index, removed.amount, removed.category
        );
        Ok(removed)
    }

    /// The collection in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }
}
