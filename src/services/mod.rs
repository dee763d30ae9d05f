//! Business logic layer

pub mod entry;

pub use entry::EntryService;
