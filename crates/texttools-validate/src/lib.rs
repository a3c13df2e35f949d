//! Validation harness for the transformation tool set.
//!
//! - [`Harness`] runs case tables and performance probes over a registry
//!   and produces a [`texttools_model::ValidationReport`].
//! - [`cases`] defines the generic probes and curated expectations.
//! - [`validators`] checks generator output shapes (UUIDs, colors, IPs).
//! - [`validation_status`] answers per-tool status from a stored snapshot.

pub mod cases;
pub mod harness;
pub mod status;
pub mod validators;

pub use cases::{CaseCheck, ValidationCase, cases_for};
pub use harness::{Harness, HarnessOptions};
pub use status::{StatusAnswer, validation_status};
pub use validators::StructuralValidator;
