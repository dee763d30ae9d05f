//! Data export
//!
//! CSV is the only externally visible export format; its column contract is
//! documented in `csv`.

pub mod csv;

pub use self::csv::export_entries_csv;
