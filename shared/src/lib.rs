use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single recorded expense as front ends see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense amount (positive values expected, not enforced)
    pub amount: f64,
    /// Free-text category label
    pub category: String,
    /// User-editable calendar date (YYYY-MM-DD)
    pub date: String,
    /// Creation instant (RFC 3339), assigned by the backend
    pub timestamp: String,
}

/// Request to record a new expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddExpenseRequest {
    /// Raw amount text exactly as the user typed it
    pub amount: String,
    /// Free-text category label
    pub category: String,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
}

impl AddExpenseRequest {
    /// Request pre-filled with today's date, the default a front end shows
    /// in its date field.
    pub fn with_today(amount: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Request to delete the expense at a position in the listing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteExpenseRequest {
    /// Zero-based position; later entries shift down by one after deletion
    pub index: usize,
}

/// Time grouping for bucketed spending summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryPeriod {
    Day,
    Week,
    Month,
}

/// Aggregate summary of the expense collection.
///
/// Pure data: rendering for display is a separate concern handled by the
/// backend's export service (or by the front end itself).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Sum over the whole collection (0.0 when empty)
    pub overall_total: f64,
    /// Per-category totals, alphabetical by label.
    /// Categories are grouped case-insensitively.
    pub per_category: BTreeMap<String, f64>,
    /// Per-month totals keyed `YYYY-MM`; keys sort chronologically
    pub per_month: BTreeMap<String, f64>,
}
