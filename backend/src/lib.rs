//! # Expense Tracker Backend
//!
//! This crate is the functional core of a single-user desktop expense
//! tracker: a CSV-backed store for recorded expenses plus pure aggregation
//! over them. It is fully synchronous, owns no UI, and exposes plain
//! operations that any front end (graphical, command-line, or web) can
//! call through the [`Backend`] facade.
//!
//! Logging goes through the `log` facade; the embedding front end installs
//! whatever logger it prefers.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

pub mod domain;
pub mod storage;

// Re-export commonly used types
pub use domain::models::expense::ExpenseError;
pub use storage::csv::CsvConnection;

use domain::commands::expenses::{AddExpenseCommand, DeleteExpenseCommand};
use domain::models::expense::Expense as DomainExpense;
use domain::{ExpenseService, ExportService, SummaryService};
use storage::csv::{ConfigRepository, ExpenseRepository, TrackerConfig};

/// Maps domain expenses to the DTOs in the `shared` crate.
struct ExpenseMapper;

impl ExpenseMapper {
    fn to_dto(expense: &DomainExpense) -> shared::Expense {
        shared::Expense {
            amount: expense.amount,
            category: expense.category.clone(),
            date: expense.date.clone(),
            timestamp: expense.timestamp.to_rfc3339(),
        }
    }
}

/// Main backend struct that orchestrates all services
///
/// An explicit instance tied to one data directory; callers construct as
/// many as they need and there is no process-wide default.
pub struct Backend {
    expense_service: ExpenseService<ExpenseRepository>,
    summary_service: SummaryService,
    export_service: ExportService,
    config_repository: ConfigRepository,
}

impl Backend {
    /// Create a backend rooted at the given data directory, creating the
    /// directory if needed and loading any previously persisted expenses.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let connection = CsvConnection::new(data_dir)?;
        Ok(Self::with_connection(connection))
    }

    /// Create a backend over an existing connection.
    pub fn with_connection(connection: CsvConnection) -> Self {
        let expense_repository = ExpenseRepository::new(connection.clone());
        let config_repository = ConfigRepository::new(connection);

        Backend {
            expense_service: ExpenseService::new(expense_repository),
            summary_service: SummaryService::new(),
            export_service: ExportService::new(),
            config_repository,
        }
    }

    /// Record a new expense. Returns the created record, or a validation
    /// or storage error.
    pub fn add_expense(
        &mut self,
        request: shared::AddExpenseRequest,
    ) -> Result<shared::Expense, ExpenseError> {
        let command = AddExpenseCommand {
            amount: request.amount,
            category: request.category,
            date: request.date,
        };
        let created = self.expense_service.add_expense(command)?;
        Ok(ExpenseMapper::to_dto(&created))
    }

    /// Delete the expense at the given position. Returns the removed
    /// record, or an index or storage error.
    pub fn delete_expense(
        &mut self,
        request: shared::DeleteExpenseRequest,
    ) -> Result<shared::Expense, ExpenseError> {
        let removed = self
            .expense_service
            .delete_expense(DeleteExpenseCommand { index: request.index })?;
        Ok(ExpenseMapper::to_dto(&removed))
    }

    /// The collection in insertion order.
    pub fn list_expenses(&self) -> Vec<shared::Expense> {
        self.expense_service
            .expenses()
            .iter()
            .map(ExpenseMapper::to_dto)
            .collect()
    }

    /// Aggregate summary of the collection: overall total, per-category
    /// totals, and monthly totals.
    pub fn get_summary_report(&self) -> shared::SummaryReport {
        self.summary_service
            .summary_report(self.expense_service.expenses())
    }

    /// Spending totals grouped by day, ISO week, or month.
    pub fn get_time_bucket_totals(&self, period: shared::SummaryPeriod) -> BTreeMap<String, f64> {
        self.summary_service
            .time_bucket_totals(self.expense_service.expenses(), period)
    }

    /// The summary report rendered as display text.
    pub fn render_summary_text(&self) -> String {
        self.export_service.render_summary(&self.get_summary_report())
    }

    /// A CSV snapshot of the collection for export.
    pub fn export_csv(&self) -> String {
        self.export_service
            .export_expenses_csv(self.expense_service.expenses())
    }

    /// Tracker configuration, created with defaults on first access.
    pub fn get_config(&self) -> Result<TrackerConfig> {
        self.config_repository.get_config()
    }

    /// Re-read the collection from disk, best effort.
    pub fn reload(&mut self) {
        self.expense_service.reload();
    }
}
