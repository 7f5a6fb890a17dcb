use anyhow::{anyhow, Result};
use csv::{Reader, Writer};
use log::{debug, warn};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::domain::models::expense::Expense as DomainExpense;
use crate::storage::traits::ExpenseStorage;
use super::connection::CsvConnection;

/// Column order written to the expense file. Loading resolves columns by
/// header name, so a file written with a different order still reads
/// correctly.
const EXPENSE_FIELDS: [&str; 4] = ["amount", "category", "date", "timestamp"];

/// CSV-based expense repository
#[derive(Clone)]
pub struct ExpenseRepository {
    connection: CsvConnection,
}

impl ExpenseRepository {
    /// Create a new CSV expense repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Fallback timestamp for rows written before the `timestamp` column
    /// existed: midnight UTC of the record's own date, or the Unix epoch
    /// when that date does not parse either.
    fn default_timestamp(date: &str) -> DateTime<Utc> {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| Utc.from_utc_datetime(&dt))
            .unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Parse a stored timestamp, tolerating formats older releases wrote.
    fn parse_timestamp(raw: &str, date: &str) -> DateTime<Utc> {
        // RFC 3339 is the current storage format
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.with_timezone(&Utc);
        }

        // Naive ISO 8601 without an offset
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Utc.from_utc_datetime(&naive);
        }

        if !raw.is_empty() {
            warn!("Unparseable timestamp '{}', deriving one from date '{}'", raw, date);
        }
        Self::default_timestamp(date)
    }
}

impl ExpenseStorage for ExpenseRepository {
    fn load_expenses(&self) -> Result<Vec<DomainExpense>> {
        let file_path = self.connection.expenses_file_path();

        if !file_path.exists() {
            debug!("No expense file at {:?}, starting empty", file_path);
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        // Resolve columns by header name; a missing `timestamp` column is
        // tolerated (older files), missing required columns are not.
        let headers = csv_reader.headers()?.clone();
        let column = |name: &str| headers.iter().position(|h| h == name);
        let amount_col = column("amount");
        let category_col = column("category");
        let date_col = column("date");
        let timestamp_col = column("timestamp");

        let mut expenses = Vec::new();

        for result in csv_reader.records() {
            let record = result?;
            let field =
                |col: Option<usize>| col.and_then(|i| record.get(i)).unwrap_or("").trim();

            let amount_text = field(amount_col);
            let amount: f64 = amount_text
                .parse()
                .map_err(|_| anyhow!("Unparseable amount '{}' in expense file", amount_text))?;

            let category = field(category_col);
            let date = field(date_col);
            if category.is_empty() || date.is_empty() {
                return Err(anyhow!("Expense record is missing its category or date"));
            }

            let timestamp = Self::parse_timestamp(field(timestamp_col), date);

            expenses.push(DomainExpense {
                amount,
                category: category.to_string(),
                date: date.to_string(),
                timestamp,
            });
        }

        debug!("Loaded {} expenses from {:?}", expenses.len(), file_path);
        Ok(expenses)
    }

    fn save_expenses(&self, expenses: &[DomainExpense]) -> Result<()> {
        let file_path = self.connection.expenses_file_path();

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)?;

        // An empty collection leaves an empty file: no header without records
        if expenses.is_empty() {
            return Ok(());
        }

        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record(EXPENSE_FIELDS)?;

        for expense in expenses {
            csv_writer.write_record(&[
                expense.amount.to_string(),
                expense.category.clone(),
                expense.date.clone(),
                expense.timestamp.to_rfc3339(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
