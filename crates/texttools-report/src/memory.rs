//! In-memory metrics sink for tests and embedded callers that do not want
//! file I/O.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use texttools_model::{
    Certificate, MetricsSink, ToolAuditRecord, TransformEvent, ValidationReport,
};

#[derive(Default)]
struct Inner {
    events: Vec<TransformEvent>,
    audits: Vec<ToolAuditRecord>,
    latest: Option<(DateTime<Utc>, ValidationReport)>,
    certificates: Vec<Certificate>,
}

/// `MetricsSink` that keeps everything in memory. No TTL is applied to
/// the snapshot; tests control freshness themselves.
#[derive(Default)]
pub struct MemorySink {
    inner: Mutex<Inner>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TransformEvent> {
        self.lock().events.clone()
    }

    pub fn audits(&self) -> Vec<ToolAuditRecord> {
        self.lock().audits.clone()
    }

    pub fn certificates(&self) -> Vec<Certificate> {
        self.lock().certificates.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a test already panicked; propagating the
        // data anyway keeps sink calls infallible.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl MetricsSink for MemorySink {
    fn record_event(&self, event: &TransformEvent) {
        self.lock().events.push(event.clone());
    }

    fn record_audit(&self, record: &ToolAuditRecord) {
        self.lock().audits.push(record.clone());
    }

    fn store_latest(&self, report: &ValidationReport) {
        self.lock().latest = Some((Utc::now(), report.clone()));
    }

    fn load_latest(&self) -> Option<ValidationReport> {
        self.lock().latest.as_ref().map(|(_, report)| report.clone())
    }

    fn write_certificate(&self, certificate: &Certificate) {
        self.lock().certificates.push(certificate.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn stores_and_returns_latest() {
        let sink = MemorySink::new();
        assert!(sink.load_latest().is_none());
        let report = ValidationReport {
            timestamp: Utc::now(),
            total_tools: 0,
            passed: 0,
            failed: 0,
            warnings: 0,
            tools: BTreeMap::new(),
            execution_time_ms: 0.0,
            success_rate: 1.0,
        };
        sink.store_latest(&report);
        assert!(sink.load_latest().is_some());
    }
}
