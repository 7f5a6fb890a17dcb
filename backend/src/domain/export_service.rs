//! Report rendering and CSV export for the expense tracker.
//!
//! This module contains the logic for turning summary data and the expense
//! collection into displayable or exportable text. The summary service stays
//! purely numeric; the UI should only handle presentation concerns.

use log::info;
use shared::SummaryReport;

use crate::domain::models::expense::Expense;

/// Export service that handles report rendering and data export
#[derive(Clone)]
pub struct ExportService;

impl ExportService {
    /// Create a new ExportService instance
    pub fn new() -> Self {
        Self
    }

    /// Render the summary report as display text: overall total first,
    /// then per-category and per-month lines in report order.
    pub fn render_summary(&self, report: &SummaryReport) -> String {
        let mut text = String::from("=== Expense Summary ===\n\n");

        text.push_str(&format!("Total Expenses: ${:.2}\n\n", report.overall_total));

        text.push_str("Expenses by Category:\n");
        for (category, total) in &report.per_category {
            text.push_str(&format!("{}: ${:.2}\n", category, total));
        }

        text.push_str("\nExpenses by Month:\n");
        for (month, total) in &report.per_month {
            text.push_str(&format!("{}: ${:.2}\n", month, total));
        }

        text
    }

    /// Generate a CSV snapshot of the collection for a front end's export
    /// action, with quotes escaped in text fields.
    pub fn export_expenses_csv(&self, expenses: &[Expense]) -> String {
        info!("Exporting {} expenses as CSV", expenses.len());

        let mut csv_content = String::from("amount,category,date,timestamp\n");

        for expense in expenses {
            let row = format!(
                "{:.2},\"{}\",{},{}\n",
                expense.amount,
                expense.category.replace('"', "\"\""),
                expense.date,
                expense.timestamp.to_rfc3339(),
            );
            csv_content.push_str(&row);
        }

        csv_content
    }
}
