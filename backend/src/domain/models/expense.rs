//! Domain model for a recorded expense.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense amount; positive values expected but not enforced beyond parsing
    pub amount: f64,
    /// Free-text category label (no closed enum at storage level)
    pub category: String,
    /// User-editable calendar date (YYYY-MM-DD), stored verbatim and not
    /// validated as a real calendar date
    pub date: String,
    /// Creation instant, assigned when the expense is recorded. Used for
    /// time-bucket summaries; never re-derived from `date`.
    pub timestamp: DateTime<Utc>,
}

/// Errors surfaced by store operations.
///
/// Load failures never appear here: an unreadable or malformed expense file
/// resets the in-memory collection to empty, because the file is fully
/// regenerable from the next save. Save failures do surface, since a silent
/// save failure would lose data.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error("Amount is not a valid number: '{0}'")]
    InvalidAmount(String),
    #[error("{0} cannot be empty")]
    MissingField(&'static str),
    #[error("No expense at position {index} ({len} recorded)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
