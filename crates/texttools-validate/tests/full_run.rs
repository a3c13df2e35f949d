//! End-to-end validation run over the whole built-in registry.

use std::sync::Arc;

use texttools_model::{MetricsSink, ToolStatus, ValidationStatus};
use texttools_report::MemorySink;
use texttools_transform::Registry;
use texttools_validate::{Harness, HarnessOptions, validation_status};

fn quick_options() -> HarnessOptions {
    HarnessOptions {
        perf_iterations: 2,
        ..HarnessOptions::default()
    }
}

#[test]
fn full_registry_run_is_all_green() {
    let registry = Registry::builtin();
    let sink = Arc::new(MemorySink::new());
    let harness = Harness::new(&registry)
        .with_sink(sink.clone())
        .with_options(quick_options());

    let report = harness.validate_all();

    let failing: Vec<_> = report
        .tools
        .values()
        .filter(|t| t.status == ToolStatus::Failed)
        .map(|t| (t.tool.clone(), t.errors.clone()))
        .collect();
    assert!(failing.is_empty(), "failing tools: {failing:?}");

    assert_eq!(report.total_tools, registry.len());
    assert_eq!(
        report.passed + report.failed + report.warnings,
        report.total_tools
    );
    assert!(report.all_passed());
    assert!((report.success_rate - 1.0).abs() < f64::EPSILON);
}

#[test]
fn run_persists_audits_snapshot_and_certificate() {
    let registry = Registry::builtin();
    let sink = Arc::new(MemorySink::new());
    let harness = Harness::new(&registry)
        .with_sink(sink.clone())
        .with_options(quick_options());

    let report = harness.validate_all();

    // One audit row per registered tool.
    assert_eq!(sink.audits().len(), registry.len());

    let latest = sink.load_latest().expect("latest snapshot stored");
    assert_eq!(latest.total_tools, report.total_tools);

    // All-green runs get exactly one certificate.
    let certificates = sink.certificates();
    assert_eq!(certificates.len(), 1);
    let certificate = &certificates[0];
    assert_eq!(certificate.summary.total_tools, registry.len());
    assert_eq!(certificate.signature.len(), 64);
    assert!(certificate.is_valid_at(certificate.issued_at));
}

#[test]
fn status_reflects_the_latest_run() {
    let registry = Registry::builtin();
    let sink = Arc::new(MemorySink::new());
    let harness = Harness::new(&registry)
        .with_sink(sink.clone())
        .with_options(quick_options());
    harness.validate_all();

    for key in ["upper-case", "base64-decode", "uuid-generate"] {
        let answer = validation_status(sink.as_ref(), key);
        assert_ne!(answer.status, ValidationStatus::Never, "{key}");
        assert!(answer.last_checked_at.is_some(), "{key}");
    }

    let answer = validation_status(sink.as_ref(), "no-such-tool");
    assert_eq!(answer.status, ValidationStatus::Never);
}
