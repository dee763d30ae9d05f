//! Financial entry model
//!
//! One `FinancialEntry` records a single monthly form submission: income plus
//! the six expense category amounts, with the derived totals computed here
//! rather than trusted from the caller. Entries are append-only: once
//! persisted they are never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FintrackError;

use super::category::ExpenseCategory;
use super::ids::EntryId;
use super::money::Money;

/// Caller-supplied fields for a new entry
///
/// Deliberately carries no derived fields; `total_expenses` and `savings`
/// are computed when the draft is turned into a `FinancialEntry`, so a
/// mismatched total can never enter the store through this path.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    /// Identifying string for the owner; free text, no referential entity
    pub user: String,
    /// Calendar-month name (the CLI form restricts this to the twelve names)
    pub month: String,
    /// Calendar year; not range-enforced by the store
    pub year: i32,
    /// Monthly income
    pub income: Money,
    pub rent: Money,
    pub utilities: Money,
    pub groceries: Money,
    pub transportation: Money,
    pub entertainment: Money,
    pub others: Money,
}

/// A persisted monthly financial entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialEntry {
    /// Unique identifier, assigned at creation
    pub id: EntryId,

    /// Owner of the entry
    pub user: String,

    /// Calendar-month name, stored as given
    pub month: String,

    /// Calendar year
    pub year: i32,

    /// Monthly income (non-negative)
    pub income: Money,

    /// The six expense category amounts (each non-negative)
    pub rent: Money,
    pub utilities: Money,
    pub groceries: Money,
    pub transportation: Money,
    pub entertainment: Money,
    pub others: Money,

    /// Derived: sum of the six category amounts
    pub total_expenses: Money,

    /// Derived: income minus total expenses; may be negative
    pub savings: Money,

    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

impl FinancialEntry {
    /// Validate a draft and construct the entry, computing the derived fields
    ///
    /// # Errors
    ///
    /// Returns a validation error if income or any category amount is
    /// negative.
    pub fn from_draft(draft: EntryDraft) -> Result<Self, FintrackError> {
        if draft.income.is_negative() {
            return Err(FintrackError::Validation(
                "income must not be negative".to_string(),
            ));
        }

        let category_amounts = [
            (ExpenseCategory::Rent, draft.rent),
            (ExpenseCategory::Utilities, draft.utilities),
            (ExpenseCategory::Groceries, draft.groceries),
            (ExpenseCategory::Transportation, draft.transportation),
            (ExpenseCategory::Entertainment, draft.entertainment),
            (ExpenseCategory::Others, draft.others),
        ];

        for (category, amount) in category_amounts {
            if amount.is_negative() {
                return Err(FintrackError::Validation(format!(
                    "{} amount must not be negative",
                    category.label()
                )));
            }
        }

        let total_expenses: Money = category_amounts.iter().map(|(_, amount)| *amount).sum();
        let savings = draft.income - total_expenses;

        Ok(Self {
            id: EntryId::new(),
            user: draft.user,
            month: draft.month,
            year: draft.year,
            income: draft.income,
            rent: draft.rent,
            utilities: draft.utilities,
            groceries: draft.groceries,
            transportation: draft.transportation,
            entertainment: draft.entertainment,
            others: draft.others,
            total_expenses,
            savings,
            created_at: Utc::now(),
        })
    }

    /// The amount recorded for a given expense category
    pub fn category_amount(&self, category: ExpenseCategory) -> Money {
        match category {
            ExpenseCategory::Rent => self.rent,
            ExpenseCategory::Utilities => self.utilities,
            ExpenseCategory::Groceries => self.groceries,
            ExpenseCategory::Transportation => self.transportation,
            ExpenseCategory::Entertainment => self.entertainment,
            ExpenseCategory::Others => self.others,
        }
    }

    /// The month and year as shown in reports and exports, e.g. "January 2024"
    pub fn period_label(&self) -> String {
        format!("{} {}", self.month, self.year)
    }

    /// Check the derived-field invariants on a record read back from disk
    ///
    /// `total_expenses` must equal the sum of the category amounts and
    /// `savings` must equal income minus total expenses. A record that fails
    /// either check did not come through `from_draft` and is treated as
    /// store corruption.
    pub fn verify_invariants(&self) -> Result<(), FintrackError> {
        let expected_total: Money = ExpenseCategory::ALL
            .iter()
            .map(|c| self.category_amount(*c))
            .sum();

        if self.total_expenses != expected_total {
            return Err(FintrackError::Validation(format!(
                "entry {}: total_expenses {} does not match category sum {}",
                self.id, self.total_expenses, expected_total
            )));
        }

        if self.savings != self.income - self.total_expenses {
            return Err(FintrackError::Validation(format!(
                "entry {}: savings {} does not match income {} minus expenses {}",
                self.id, self.savings, self.income, self.total_expenses
            )));
        }

        Ok(())
    }
}
