use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report::{CaseOutcome, ToolStatus};

/// Analytics event emitted after each successful transformation.
///
/// Fire-and-forget: the executor hands these to a channel and never waits
/// for persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformEvent {
    pub key: String,
    pub input_len: usize,
    pub output_len: usize,
    pub elapsed_ms: f64,
    pub created_at: DateTime<Utc>,
}

/// Durable audit row for one tool's validation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolAuditRecord {
    pub tool_name: String,
    pub validation_status: ToolStatus,
    pub validation_errors: Vec<String>,
    pub validation_warnings: Vec<String>,
    pub test_results: Vec<CaseOutcome>,
    pub execution_time_ms: f64,
    pub created_at: DateTime<Utc>,
}

/// Summary embedded in an all-green certificate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateSummary {
    pub total_tools: usize,
    pub passed: usize,
    pub warnings: usize,
    pub success_rate: f64,
}

/// Artifact asserting that a validation run passed every tool.
///
/// Only emitted when `failed == 0`. The signature is a SHA-256 digest of
/// the canonical report JSON, not a cryptographic signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub certificate_id: String,
    pub issued_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub summary: CertificateSummary,
    pub signature: String,
}

impl Certificate {
    pub fn is_valid_at(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.issued_at && instant <= self.valid_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn certificate_validity_window() {
        let issued = Utc::now();
        let certificate = Certificate {
            certificate_id: "cert-1".to_string(),
            issued_at: issued,
            valid_until: issued + Duration::hours(24),
            summary: CertificateSummary {
                total_tools: 3,
                passed: 3,
                warnings: 0,
                success_rate: 1.0,
            },
            signature: "00".repeat(32),
        };
        assert!(certificate.is_valid_at(issued + Duration::hours(1)));
        assert!(!certificate.is_valid_at(issued + Duration::hours(25)));
    }
}
