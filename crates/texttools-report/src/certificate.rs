//! All-green certificate issuance.
//!
//! A certificate asserts that one validation run passed every registered
//! tool. The signature is a SHA-256 digest of the canonical report JSON,
//! giving consumers an integrity check against the stored report.

use chrono::{Duration, Utc};
use tracing::warn;
use uuid::Uuid;

use texttools_model::{Certificate, CertificateSummary, ValidationReport};

use crate::hash::sha256_hex;

/// Validity window for an issued certificate.
pub const VALIDITY_HOURS: i64 = 24;

/// Issue a certificate for an all-green report.
///
/// Returns `None` when the report has failures; callers should treat that
/// as a programming error, not a runtime condition.
pub fn issue_certificate(report: &ValidationReport) -> Option<Certificate> {
    if !report.all_passed() {
        return None;
    }
    let canonical = match serde_json::to_vec(report) {
        Ok(bytes) => bytes,
        Err(error) => {
            warn!(%error, "failed to canonicalize report for signing");
            Vec::new()
        }
    };
    let issued_at = Utc::now();
    Some(Certificate {
        certificate_id: Uuid::new_v4().to_string(),
        issued_at,
        valid_until: issued_at + Duration::hours(VALIDITY_HOURS),
        summary: CertificateSummary {
            total_tools: report.total_tools,
            passed: report.passed,
            warnings: report.warnings,
            success_rate: report.success_rate,
        },
        signature: sha256_hex(&canonical),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn report(failed: usize) -> ValidationReport {
        ValidationReport {
            timestamp: Utc::now(),
            total_tools: 2,
            passed: 2 - failed,
            failed,
            warnings: 0,
            tools: BTreeMap::new(),
            execution_time_ms: 1.0,
            success_rate: if failed == 0 { 1.0 } else { 0.5 },
        }
    }

    #[test]
    fn issues_only_for_all_green() {
        let certificate = issue_certificate(&report(0)).expect("all-green certificate");
        assert_eq!(certificate.summary.total_tools, 2);
        assert_eq!(certificate.signature.len(), 64);
        assert!(certificate.valid_until > certificate.issued_at);

        assert!(issue_certificate(&report(1)).is_none());
    }
}
