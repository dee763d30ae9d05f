//! Dashboard formatting for terminal output
//!
//! Renders the overview metrics, the expenses breakdown, the per-month entry
//! table, and the savings-goal progress bar.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{FinancialEntry, Money};
use crate::reports::{savings_progress, Overview};

use super::{format_bar, format_percentage};

/// One row of the detailed entries table
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Rent/Mortgage")]
    rent: String,
    #[tabled(rename = "Utilities")]
    utilities: String,
    #[tabled(rename = "Groceries")]
    groceries: String,
    #[tabled(rename = "Transportation")]
    transportation: String,
    #[tabled(rename = "Entertainment")]
    entertainment: String,
    #[tabled(rename = "Others")]
    others: String,
    #[tabled(rename = "Total Expenses")]
    total_expenses: String,
    #[tabled(rename = "Savings")]
    savings: String,
    #[tabled(rename = "Timestamp")]
    timestamp: String,
}

impl EntryRow {
    fn from_entry(entry: &FinancialEntry, symbol: &str) -> Self {
        Self {
            month: entry.period_label(),
            income: entry.income.format_with_symbol(symbol),
            rent: entry.rent.format_with_symbol(symbol),
            utilities: entry.utilities.format_with_symbol(symbol),
            groceries: entry.groceries.format_with_symbol(symbol),
            transportation: entry.transportation.format_with_symbol(symbol),
            entertainment: entry.entertainment.format_with_symbol(symbol),
            others: entry.others.format_with_symbol(symbol),
            total_expenses: entry.total_expenses.format_with_symbol(symbol),
            savings: entry.savings.format_with_symbol(symbol),
            timestamp: entry.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Format the detailed entries table
pub fn format_entry_table(entries: &[FinancialEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No entries found.".to_string();
    }

    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|e| EntryRow::from_entry(e, symbol))
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format the overview metrics and expenses breakdown
pub fn format_overview(overview: &Overview, user: &str, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Overview for {} ({} {})\n",
        user,
        overview.entry_count,
        if overview.entry_count == 1 { "entry" } else { "entries" }
    ));
    output.push_str(&format!(
        "  Total Income:   {}\n",
        overview.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total Expenses: {}\n",
        overview.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total Savings:  {}\n",
        overview.total_savings.format_with_symbol(symbol)
    ));

    output.push_str("\nExpenses Breakdown\n");

    let label_width = overview
        .categories
        .iter()
        .map(|c| c.category.label().len())
        .max()
        .unwrap_or(0);

    for category in &overview.categories {
        output.push_str(&format!(
            "  {:<label_width$}  {:>12}  {:>6}  {}\n",
            category.category.label(),
            category.total.format_with_symbol(symbol),
            format_percentage(category.percentage),
            format_bar(category.percentage, 100.0, 20),
            label_width = label_width,
        ));
    }

    output
}

/// Format the savings-goal progress section
pub fn format_goal_progress(overview: &Overview, goal: Money, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Savings Goal\n");

    if goal.cents() <= 0 {
        output.push_str("  No savings goal set. Use 'fintrack goal set <amount>'.\n");
        return output;
    }

    let progress = savings_progress(overview.total_savings, goal);

    output.push_str(&format!(
        "  {} / {} ({:.2}%)\n",
        overview.total_savings.format_with_symbol(symbol),
        goal.format_with_symbol(symbol),
        progress,
    ));
    output.push_str(&format!("  {}\n", format_bar(progress, 100.0, 40)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, Money};

    fn entry(month: &str) -> FinancialEntry {
        FinancialEntry::from_draft(EntryDraft {
            user: "ava".to_string(),
            month: month.to_string(),
            year: 2024,
            income: Money::from_units(5000),
            rent: Money::from_units(1500),
            utilities: Money::from_units(300),
            groceries: Money::from_units(400),
            transportation: Money::from_units(200),
            entertainment: Money::from_units(150),
            others: Money::from_units(100),
        })
        .unwrap()
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_entry_table(&[], "$"), "No entries found.");
    }

    #[test]
    fn test_table_contains_entry_values() {
        let table = format_entry_table(&[entry("January")], "$");
        assert!(table.contains("January 2024"));
        assert!(table.contains("$5000.00"));
        assert!(table.contains("$2350.00"));
        assert!(table.contains("Rent/Mortgage"));
    }

    #[test]
    fn test_overview_output() {
        let entries = vec![entry("January"), entry("February")];
        let overview = Overview::from_entries(&entries);
        let output = format_overview(&overview, "ava", "$");

        assert!(output.contains("Overview for ava (2 entries)"));
        assert!(output.contains("Total Income:   $10000.00"));
        assert!(output.contains("Expenses Breakdown"));
        assert!(output.contains("Rent/Mortgage"));
    }

    #[test]
    fn test_goal_progress_output() {
        let entries = vec![entry("January")];
        let overview = Overview::from_entries(&entries);
        let output = format_goal_progress(&overview, Money::from_units(10000), "$");

        assert!(output.contains("$2350.00 / $10000.00"));
        assert!(output.contains("23.50%"));
    }

    #[test]
    fn test_goal_progress_unset_goal() {
        let overview = Overview::from_entries(&[]);
        let output = format_goal_progress(&overview, Money::zero(), "$");

        assert!(output.contains("No savings goal set"));
    }
}
