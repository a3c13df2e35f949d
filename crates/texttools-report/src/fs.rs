//! Filesystem-backed metrics sink.
//!
//! Layout under the metrics directory:
//!
//! - `events.jsonl` — one analytics event per line
//! - `audit.jsonl` — one per-tool validation audit record per line
//! - `latest.json` — the most recent report snapshot, wrapped with its
//!   store time; reads older than the TTL return nothing
//! - `certificates/<id>.json` — all-green certificate artifacts
//!
//! Every write is best-effort: failures log a warning and the call
//! returns. Concurrent runs race on `latest.json` with last-writer-wins
//! semantics; reports are advisory, so no locking is used.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use texttools_model::{
    Certificate, MetricsSink, ToolAuditRecord, TransformEvent, ValidationReport,
};

/// Snapshot freshness window.
pub const LATEST_TTL_MINUTES: i64 = 60;

/// Snapshot wrapper carrying its own store time for the TTL check.
#[derive(Debug, Serialize, Deserialize)]
struct StoredReport {
    stored_at: DateTime<Utc>,
    report: ValidationReport,
}

/// `MetricsSink` writing JSON files under a directory.
pub struct FsSink {
    dir: PathBuf,
    ttl: Duration,
}

impl FsSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ttl: Duration::minutes(LATEST_TTL_MINUTES),
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn append_jsonl<T: Serialize>(&self, file_name: &str, record: &T) {
        let path = self.dir.join(file_name);
        if let Err(error) = self.try_append_jsonl(&path, record) {
            warn!(path = %path.display(), %error, "metrics append failed, record dropped");
        }
    }

    fn try_append_jsonl<T: Serialize>(&self, path: &Path, record: &T) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{line}")
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(value)?;
        fs::write(path, json)
    }
}

impl MetricsSink for FsSink {
    fn record_event(&self, event: &TransformEvent) {
        self.append_jsonl("events.jsonl", event);
    }

    fn record_audit(&self, record: &ToolAuditRecord) {
        self.append_jsonl("audit.jsonl", record);
    }

    fn store_latest(&self, report: &ValidationReport) {
        let path = self.dir.join("latest.json");
        let stored = StoredReport {
            stored_at: Utc::now(),
            report: report.clone(),
        };
        if let Err(error) = self.write_json(&path, &stored) {
            warn!(path = %path.display(), %error, "failed to store latest report");
        }
    }

    fn load_latest(&self) -> Option<ValidationReport> {
        let path = self.dir.join("latest.json");
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            // A missing snapshot is the normal first-run state.
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to read latest report");
                return None;
            }
        };
        let stored: StoredReport = match serde_json::from_slice(&bytes) {
            Ok(stored) => stored,
            Err(error) => {
                warn!(path = %path.display(), %error, "latest report is unreadable");
                return None;
            }
        };
        if Utc::now() - stored.stored_at > self.ttl {
            return None;
        }
        Some(stored.report)
    }

    fn write_certificate(&self, certificate: &Certificate) {
        let path = self
            .dir
            .join("certificates")
            .join(format!("{}.json", certificate.certificate_id));
        if let Err(error) = self.write_json(&path, certificate) {
            warn!(path = %path.display(), %error, "failed to write certificate");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_report() -> ValidationReport {
        ValidationReport {
            timestamp: Utc::now(),
            total_tools: 1,
            passed: 1,
            failed: 0,
            warnings: 0,
            tools: BTreeMap::new(),
            execution_time_ms: 3.0,
            success_rate: 1.0,
        }
    }

    #[test]
    fn snapshot_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sink = FsSink::new(dir.path());
        assert!(sink.load_latest().is_none());

        sink.store_latest(&sample_report());
        let loaded = sink.load_latest().expect("fresh snapshot");
        assert_eq!(loaded.total_tools, 1);
    }

    #[test]
    fn expired_snapshot_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sink = FsSink::new(dir.path()).with_ttl(Duration::seconds(-1));
        sink.store_latest(&sample_report());
        assert!(sink.load_latest().is_none());
    }

    #[test]
    fn appends_accumulate_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sink = FsSink::new(dir.path());
        let event = TransformEvent {
            key: "upper-case".to_string(),
            input_len: 3,
            output_len: 3,
            elapsed_ms: 0.2,
            created_at: Utc::now(),
        };
        sink.record_event(&event);
        sink.record_event(&event);
        let contents = fs::read_to_string(dir.path().join("events.jsonl")).expect("events file");
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn certificate_lands_in_subdirectory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sink = FsSink::new(dir.path());
        let certificate = crate::certificate::issue_certificate(&sample_report())
            .expect("all-green certificate");
        sink.write_certificate(&certificate);
        let path = dir
            .path()
            .join("certificates")
            .join(format!("{}.json", certificate.certificate_id));
        assert!(path.exists());
    }

    #[test]
    fn missing_directory_never_panics() {
        // Point at an unwritable location; calls must log and continue.
        let sink = FsSink::new("/proc/definitely-not-writable/metrics");
        sink.store_latest(&sample_report());
        assert!(sink.load_latest().is_none());
    }
}
