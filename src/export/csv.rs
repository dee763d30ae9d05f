//! CSV export functionality
//!
//! Exports the aggregated entry view as a full-table CSV dump. External
//! tools consume this file, so the column set and ordering are a stable
//! contract and must not change:
//!
//! `Month,Income,Rent/Mortgage,Utilities,Groceries,Transportation,Entertainment,Others,Total Expenses,Savings,Timestamp`

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{ExpenseCategory, FinancialEntry, Money};

/// Format a monetary value for export: plain 2-decimal number, no symbol
fn money_field(amount: Money) -> String {
    format!("{:.2}", amount.as_units_f64())
}

/// Write the header row for the entry dump
fn header() -> Vec<String> {
    let mut columns = vec!["Month".to_string(), "Income".to_string()];
    columns.extend(ExpenseCategory::ALL.iter().map(|c| c.label().to_string()));
    columns.push("Total Expenses".to_string());
    columns.push("Savings".to_string());
    columns.push("Timestamp".to_string());
    columns
}

/// Export entries to CSV in insertion order
pub fn export_entries_csv<W: Write>(entries: &[FinancialEntry], writer: W) -> FintrackResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(header())
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    for entry in entries {
        let mut record = vec![entry.period_label(), money_field(entry.income)];
        record.extend(
            ExpenseCategory::ALL
                .iter()
                .map(|&c| money_field(entry.category_amount(c))),
        );
        record.push(money_field(entry.total_expenses));
        record.push(money_field(entry.savings));
        record.push(entry.created_at.format("%Y-%m-%d").to_string());

        csv_writer
            .write_record(record)
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}
