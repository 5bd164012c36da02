//! Shutter Core - snapshot line diff engine
//!
//! This crate provides:
//! - The contiguous-block line diff used to compare accepted and freshly
//!   captured snapshots ([`diff`])
//! - Junk policies and diff options ([`policy`])
//! - Plain-text diff summaries ([`diff::summary`])
//! - The structured error facility ([`errors`]) and logging facility
//!   ([`logging_facility`])

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod policy;

pub use shutter_core_types::schema;

// Re-export commonly used types
pub use diff::{histogram, histogram_with, histogram_within, DiffKind, DiffLine, DiffStats};
pub use errors::{ExError, ExErrorKind, Result, ShutterError};
pub use policy::{BlankLineJunkPolicy, DiffOptions, JunkMode, JunkPolicy, NoJunkPolicy};
