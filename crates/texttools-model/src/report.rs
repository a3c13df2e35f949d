use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome status for a single validated tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Passed,
    Failed,
    Warning,
}

/// Status answer for a tool that may never have been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Passed,
    Failed,
    Warning,
    Never,
}

impl From<ToolStatus> for ValidationStatus {
    fn from(status: ToolStatus) -> Self {
        match status {
            ToolStatus::Passed => Self::Passed,
            ToolStatus::Failed => Self::Failed,
            ToolStatus::Warning => Self::Warning,
        }
    }
}

/// Recorded outcome of a single validation case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// The input fed to the executor. Case inputs are short fixed probes,
    /// so they are stored verbatim.
    pub input: String,
    /// Expected output, when the case asserted an exact/loose match.
    pub expected: Option<String>,
    /// Actual output, when the executor returned one.
    pub actual: Option<String>,
    /// Whether the case passed its check.
    pub passed: bool,
    /// Failure detail when the case did not pass.
    pub detail: Option<String>,
}

/// Aggregated validation outcome for one tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolValidationResult {
    pub tool: String,
    pub status: ToolStatus,
    /// Case outcomes in execution order.
    pub cases: Vec<CaseOutcome>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub execution_time_ms: f64,
}

impl ToolValidationResult {
    pub fn failed_case_count(&self) -> usize {
        self.cases.iter().filter(|c| !c.passed).count()
    }
}

/// Report for one complete validation run over the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub timestamp: DateTime<Utc>,
    pub total_tools: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    /// Per-tool results keyed by transformation key.
    pub tools: BTreeMap<String, ToolValidationResult>,
    pub execution_time_ms: f64,
    /// Fraction of tools that did not fail, in [0, 1].
    pub success_rate: f64,
}

impl ValidationReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn tool(&self, key: &str) -> Option<&ToolValidationResult> {
        self.tools.get(key)
    }
}
