//! Core data models for fintrack
//!
//! Defines the money type, typed entry identifier, calendar months, the six
//! expense categories, and the financial entry itself.

pub mod category;
pub mod entry;
pub mod ids;
pub mod money;
pub mod month;

pub use category::ExpenseCategory;
pub use entry::{EntryDraft, FinancialEntry};
pub use ids::EntryId;
pub use money::Money;
pub use month::Month;
