//! Aggregation over the expense collection.
//!
//! Every method is a pure read over a borrowed slice; nothing here mutates
//! state or touches storage. Report rendering lives in the export service.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use shared::{SummaryPeriod, SummaryReport};

use crate::domain::models::expense::Expense;

#[derive(Clone)]
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Total over records whose category matches case-insensitively.
    /// 0.0 when nothing matches.
    pub fn category_total(&self, expenses: &[Expense], category: &str) -> f64 {
        let wanted = category.to_lowercase();
        expenses
            .iter()
            .filter(|e| e.category.to_lowercase() == wanted)
            .map(|e| e.amount)
            .sum()
    }

    /// Total over the whole collection; 0.0 when empty.
    pub fn overall_total(&self, expenses: &[Expense]) -> f64 {
        expenses.iter().map(|e| e.amount).sum()
    }

    /// Totals grouped by a bucket key derived from each record's creation
    /// timestamp. Keys sort lexicographically into chronological order:
    /// day `YYYY-MM-DD`, week `YYYY-Www` (ISO week paired with its ISO
    /// week-based year), month `YYYY-MM`.
    pub fn time_bucket_totals(
        &self,
        expenses: &[Expense],
        period: SummaryPeriod,
    ) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();

        for expense in expenses {
            let key = match period {
                SummaryPeriod::Day => expense.timestamp.format("%Y-%m-%d").to_string(),
                SummaryPeriod::Week => {
                    let week = expense.timestamp.iso_week();
                    format!("{:04}-W{:02}", week.year(), week.week())
                }
                SummaryPeriod::Month => expense.timestamp.format("%Y-%m").to_string(),
            };
            *totals.entry(key).or_insert(0.0) += expense.amount;
        }

        totals
    }

    /// Pure report data: overall total, per-category totals, and monthly
    /// totals. Categories group case-insensitively and each group is
    /// labeled with its first-seen spelling, so the per-category rows
    /// always sum to the overall total.
    pub fn summary_report(&self, expenses: &[Expense]) -> SummaryReport {
        let mut label_for: HashMap<String, String> = HashMap::new();
        let mut per_category: BTreeMap<String, f64> = BTreeMap::new();

        for expense in expenses {
            let label = label_for
                .entry(expense.category.to_lowercase())
                .or_insert_with(|| expense.category.clone())
                .clone();
            *per_category.entry(label).or_insert(0.0) += expense.amount;
        }

        SummaryReport {
            overall_total: self.overall_total(expenses),
            per_category,
            per_month: self.time_bucket_totals(expenses, SummaryPeriod::Month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::expense;

    fn sample() -> Vec<Expense> {
        vec![
            expense(12.5, "Food", "2024-01-05", "2024-01-05T18:30:00Z"),
            expense(7.25, "Transport", "2024-01-06", "2024-01-06T08:10:00Z"),
        ]
    }

    #[test]
    fn test_category_total_is_case_insensitive() {
        let expenses = sample();
        let service = SummaryService::new();

        assert_eq!(service.category_total(&expenses, "food"), 12.5);
        assert_eq!(
            service.category_total(&expenses, "FOOD"),
            service.category_total(&expenses, "food")
        );
        assert_eq!(service.category_total(&expenses, "rent"), 0.0);
    }

    #[test]
    fn test_overall_total_of_empty_is_zero() {
        let service = SummaryService::new();
        assert_eq!(service.overall_total(&[]), 0.0);
    }

    #[test]
    fn test_overall_equals_sum_over_distinct_categories() {
        let expenses = vec![
            expense(10.0, "Food", "2024-01-05", "2024-01-05T12:00:00Z"),
            expense(2.5, "food", "2024-01-06", "2024-01-06T12:00:00Z"),
            expense(4.0, "Bills", "2024-01-07", "2024-01-07T12:00:00Z"),
        ];
        let service = SummaryService::new();

        let by_category: f64 = service.category_total(&expenses, "food")
            + service.category_total(&expenses, "bills");
        assert_eq!(service.overall_total(&expenses), by_category);
    }

    #[test]
    fn test_two_expense_collection_totals() {
        let expenses = sample();
        let service = SummaryService::new();

        assert_eq!(service.overall_total(&expenses), 19.75);
        assert_eq!(service.category_total(&expenses, "food"), 12.5);

        let monthly = service.time_bucket_totals(&expenses, SummaryPeriod::Month);
        assert_eq!(monthly.get("2024-01"), Some(&19.75));
    }

    #[test]
    fn test_day_bucket_keys() {
        let expenses = sample();
        let service = SummaryService::new();

        let daily = service.time_bucket_totals(&expenses, SummaryPeriod::Day);
        assert_eq!(daily.get("2024-01-05"), Some(&12.5));
        assert_eq!(daily.get("2024-01-06"), Some(&7.25));
    }

    #[test]
    fn test_week_bucket_uses_iso_week_year() {
        // 2024-12-30 is a Monday belonging to ISO week 1 of 2025
        let expenses = vec![
            expense(5.0, "Food", "2024-12-30", "2024-12-30T09:00:00Z"),
            expense(1.0, "Food", "2024-01-05", "2024-01-05T09:00:00Z"),
        ];
        let service = SummaryService::new();

        let weekly = service.time_bucket_totals(&expenses, SummaryPeriod::Week);
        assert_eq!(weekly.get("2025-W01"), Some(&5.0));
        assert_eq!(weekly.get("2024-W01"), Some(&1.0));

        // Lexicographic key order is chronological order
        let keys: Vec<_> = weekly.keys().collect();
        assert_eq!(keys, vec!["2024-W01", "2025-W01"]);
    }

    #[test]
    fn test_report_groups_categories_case_insensitively() {
        let expenses = vec![
            expense(10.0, "Food", "2024-01-05", "2024-01-05T12:00:00Z"),
            expense(2.5, "FOOD", "2024-01-06", "2024-01-06T12:00:00Z"),
            expense(4.0, "Bills", "2024-02-07", "2024-02-07T12:00:00Z"),
        ];
        let service = SummaryService::new();

        let report = service.summary_report(&expenses);
        assert_eq!(report.overall_total, 16.5);
        assert_eq!(report.per_category.get("Food"), Some(&12.5));
        assert!(!report.per_category.contains_key("FOOD"));
        assert_eq!(report.per_category.values().sum::<f64>(), report.overall_total);
        assert_eq!(report.per_month.get("2024-01"), Some(&12.5));
        assert_eq!(report.per_month.get("2024-02"), Some(&4.0));
    }

    #[test]
    fn test_report_of_empty_collection() {
        let service = SummaryService::new();
        let report = service.summary_report(&[]);

        assert_eq!(report.overall_total, 0.0);
        assert!(report.per_category.is_empty());
        assert!(report.per_month.is_empty());
    }
}
