//! Expense category definitions
//!
//! The tracker uses six fixed expense buckets. The display labels double as
//! the CSV export column names, so they must not change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six fixed expense buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Rent,
    Utilities,
    Groceries,
    Transportation,
    Entertainment,
    Others,
}

impl ExpenseCategory {
    /// All categories, in the order they appear in forms, reports, and exports
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Rent,
        ExpenseCategory::Utilities,
        ExpenseCategory::Groceries,
        ExpenseCategory::Transportation,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Others,
    ];

    /// Display label; also the export column name
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Rent => "Rent/Mortgage",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Others => "Others",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
