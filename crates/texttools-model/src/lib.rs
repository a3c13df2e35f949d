//! Shared data model for the texttools transformation engine.
//!
//! - **error**: the transformation error taxonomy and input limits
//! - **report**: validation report types produced by the harness
//! - **telemetry**: analytics events, audit records, and certificates
//! - **sink**: the `MetricsSink` trait implemented by `texttools-report`

pub mod error;
pub mod report;
pub mod sink;
pub mod telemetry;

pub use error::{ErrorKind, INPUT_PREVIEW_CHARS, MAX_INPUT_CHARS, Result, TransformError};
pub use report::{
    CaseOutcome, ToolStatus, ToolValidationResult, ValidationReport, ValidationStatus,
};
pub use sink::MetricsSink;
pub use telemetry::{Certificate, CertificateSummary, ToolAuditRecord, TransformEvent};
