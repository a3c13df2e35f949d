//! Metrics sink interface shared by the executor and validation harness.
//!
//! All methods are best-effort by contract: implementations log failures
//! and continue. A sink error must never alter a transformation result or
//! abort a validation run, so no method returns `Result`.

use crate::report::ValidationReport;
use crate::telemetry::{Certificate, ToolAuditRecord, TransformEvent};

/// Durable storage for analytics events, validation audit rows, the cached
/// "latest" report snapshot, and all-green certificates.
///
/// Concurrent writers race on the latest snapshot with last-writer-wins
/// semantics; reports are advisory, so no coordination is imposed.
pub trait MetricsSink: Send + Sync {
    /// Append an analytics event for one successful transformation.
    fn record_event(&self, event: &TransformEvent);

    /// Append a per-tool validation audit record.
    fn record_audit(&self, record: &ToolAuditRecord);

    /// Store the full report as the latest snapshot.
    fn store_latest(&self, report: &ValidationReport);

    /// Load the latest snapshot, if one exists and is fresher than the
    /// sink's TTL.
    fn load_latest(&self) -> Option<ValidationReport>;

    /// Write an all-green certificate artifact.
    fn write_certificate(&self, certificate: &Certificate);
}
