//! Audit logging system
//!
//! Records every store mutation to an append-only, line-delimited JSON log:
//! entry creations and settings updates. The log is an observability surface
//! only; nothing in the tracker reads it back at runtime.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
