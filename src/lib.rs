//! fintrack - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the fintrack
//! application: a single-user tracker where monthly income/expense entries
//! are recorded into an append-only file-backed store and a terminal
//! dashboard renders aggregates and savings-goal progress over them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, categories, entries)
//! - `storage`: JSON file storage layer (the entry store)
//! - `services`: Business logic layer
//! - `reports`: Pure aggregate computations for the dashboard
//! - `export`: CSV export of the aggregated view
//! - `display`: Terminal output formatting
//! - `audit`: Audit logging system
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::FintrackPaths, settings::Settings};
//! use fintrack::storage::Storage;
//!
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
