//! Dashboard overview aggregates
//!
//! Pure computations over a user's entry sequence: income/expense/savings
//! totals, the per-category breakdown, and savings-goal progress. Everything
//! here is deterministic and order-independent, so it is recomputed on every
//! render with no cached state.

use crate::models::{ExpenseCategory, FinancialEntry, Money};

/// Summed spending for one expense category
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    /// The category
    pub category: ExpenseCategory,
    /// Total across all entries
    pub total: Money,
    /// Percentage of total expenses (0 when there are no expenses)
    pub percentage: f64,
}

/// Aggregates over a user's entries
#[derive(Debug, Clone)]
pub struct Overview {
    /// Number of entries aggregated
    pub entry_count: usize,
    /// Sum of entry incomes
    pub total_income: Money,
    /// Sum of entry expense totals
    pub total_expenses: Money,
    /// Sum of entry savings; may be negative
    pub total_savings: Money,
    /// Per-category sums, in fixed category order
    pub categories: Vec<CategoryTotal>,
}

impl Overview {
    /// Compute the overview for a sequence of entries
    pub fn from_entries(entries: &[FinancialEntry]) -> Self {
        let total_income: Money = entries.iter().map(|e| e.income).sum();
        let total_expenses: Money = entries.iter().map(|e| e.total_expenses).sum();
        let total_savings: Money = entries.iter().map(|e| e.savings).sum();

        let categories = ExpenseCategory::ALL
            .iter()
            .map(|&category| {
                let total: Money = entries.iter().map(|e| e.category_amount(category)).sum();
                let percentage = if total_expenses.is_zero() {
                    0.0
                } else {
                    (total.cents() as f64 / total_expenses.cents() as f64) * 100.0
                };
                CategoryTotal {
                    category,
                    total,
                    percentage,
                }
            })
            .collect();

        Self {
            entry_count: entries.len(),
            total_income,
            total_expenses,
            total_savings,
            categories,
        }
    }
}

/// Progress toward a savings goal, as a percentage capped at 100
///
/// Returns 0 when the goal is not positive, so a zero goal never divides by
/// zero. The result may be negative when cumulative savings are negative.
pub fn savings_progress(total_savings: Money, goal: Money) -> f64 {
    if goal.cents() <= 0 {
        return 0.0;
    }

    let progress = (total_savings.cents() as f64 / goal.cents() as f64) * 100.0;
    progress.min(100.0)
}
