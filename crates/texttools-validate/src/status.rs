//! Per-tool status lookup against the latest stored snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use texttools_model::{MetricsSink, ValidationStatus};

/// Answer to "what is the validation status of this tool?".
#[derive(Debug, Clone, Serialize)]
pub struct StatusAnswer {
    pub status: ValidationStatus,
    /// Timestamp of the run the answer came from, when one exists.
    pub last_checked_at: Option<DateTime<Utc>>,
}

/// Resolve a tool's status from the sink's latest snapshot. A missing or
/// expired snapshot, or a tool absent from it, answers `Never`.
pub fn validation_status(sink: &dyn MetricsSink, key: &str) -> StatusAnswer {
    match sink.load_latest() {
        Some(report) => match report.tool(key) {
            Some(result) => StatusAnswer {
                status: result.status.into(),
                last_checked_at: Some(report.timestamp),
            },
            None => StatusAnswer {
                status: ValidationStatus::Never,
                last_checked_at: None,
            },
        },
        None => StatusAnswer {
            status: ValidationStatus::Never,
            last_checked_at: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texttools_report::MemorySink;
    use texttools_transform::Registry;

    use crate::harness::{Harness, HarnessOptions};

    #[test]
    fn unknown_tool_answers_never() {
        let sink = MemorySink::new();
        let answer = validation_status(&sink, "upper-case");
        assert_eq!(answer.status, ValidationStatus::Never);
        assert!(answer.last_checked_at.is_none());
    }

    #[test]
    fn validated_tool_answers_from_latest_snapshot() {
        let registry = Registry::builtin();
        let sink = std::sync::Arc::new(MemorySink::new());
        let harness = Harness::new(&registry)
            .with_sink(sink.clone())
            .with_options(HarnessOptions {
                perf_iterations: 1,
                ..HarnessOptions::default()
            });
        harness.validate_all();

        let answer = validation_status(sink.as_ref(), "upper-case");
        assert_ne!(answer.status, ValidationStatus::Never);
        assert!(answer.last_checked_at.is_some());
    }
}
