//! Aggregate reports computed at read time

pub mod overview;

pub use overview::{savings_progress, CategoryTotal, Overview};
