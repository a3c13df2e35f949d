//! Subcommand implementations.

use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use tracing::debug;

use texttools_core::{Executor, ExecutorOptions, Telemetry};
use texttools_model::ToolStatus;
use texttools_report::FsSink;
use texttools_transform::Registry;
use texttools_validate::{Harness, validation_status};

use crate::cli::{StatusArgs, TransformArgs, ValidateArgs};
use crate::summary::{print_summary, print_tool_detail, tool_table};

/// Default metrics directory, relative to the working directory.
const DEFAULT_METRICS_DIR: &str = ".texttools";

/// Hard per-transformation wall-clock limit applied by the CLI.
const TRANSFORM_TIMEOUT: Duration = Duration::from_secs(1);

fn metrics_dir(dir: Option<&PathBuf>) -> PathBuf {
    dir.cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_METRICS_DIR))
}

/// Apply one transformation, reading stdin when no text argument is given.
pub fn run_transform(args: &TransformArgs) -> anyhow::Result<String> {
    let registry = Registry::builtin();
    let input = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read input from stdin")?;
            // Shells append a trailing newline; strip exactly one.
            if buffer.ends_with('\n') {
                buffer.pop();
                if buffer.ends_with('\r') {
                    buffer.pop();
                }
            }
            buffer
        }
    };

    let options = ExecutorOptions {
        timeout: Some(TRANSFORM_TIMEOUT),
        ..ExecutorOptions::default()
    };

    if args.no_metrics {
        let executor = Executor::new(&registry).with_options(options);
        return Ok(executor.execute(&input, &args.key)?);
    }

    let sink = Arc::new(FsSink::new(metrics_dir(args.metrics_dir.as_ref())));
    let (telemetry, worker) =
        Telemetry::spawn(sink).context("failed to start metrics writer")?;
    let executor = Executor::new(&registry)
        .with_options(options)
        .with_telemetry(telemetry);
    let result = executor.execute(&input, &args.key);
    // Drop the emit handle so the writer drains and exits, then flush.
    drop(executor);
    worker.join();
    Ok(result?)
}

/// Print the transformation table.
pub fn run_list() -> anyhow::Result<()> {
    let registry = Registry::builtin();
    println!("{}", tool_table(&registry));
    println!("{} transformations", registry.len());
    Ok(())
}

/// Validate the tool set (or a single tool). Returns `true` when nothing
/// failed.
pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<bool> {
    let registry = Registry::builtin();
    let sink = Arc::new(FsSink::new(metrics_dir(args.metrics_dir.as_ref())));
    let harness = Harness::new(&registry).with_sink(sink);

    if let Some(key) = &args.key {
        let Some(descriptor) = registry.lookup(key) else {
            bail!("unknown transformation key: {key}");
        };
        let result = harness.validate_tool(descriptor);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_tool_detail(&result);
        }
        return Ok(result.status != ToolStatus::Failed);
    }

    debug!(tools = registry.len(), "starting full validation run");
    let report = harness.validate_all();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(report.all_passed())
}

/// Answer a tool's validation status from the stored snapshot.
pub fn run_status(args: &StatusArgs) -> anyhow::Result<()> {
    let registry = Registry::builtin();
    if !registry.contains(&args.key) {
        bail!("unknown transformation key: {}", args.key);
    }
    let sink = FsSink::new(metrics_dir(args.metrics_dir.as_ref()));
    let answer = validation_status(&sink, &args.key);
    match answer.last_checked_at {
        Some(checked) => println!(
            "{}: {} (checked {})",
            args.key,
            status_word(answer.status),
            checked.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => println!("{}: never validated", args.key),
    }
    Ok(())
}

fn status_word(status: texttools_model::ValidationStatus) -> &'static str {
    match status {
        texttools_model::ValidationStatus::Passed => "passed",
        texttools_model::ValidationStatus::Failed => "failed",
        texttools_model::ValidationStatus::Warning => "passed with warnings",
        texttools_model::ValidationStatus::Never => "never validated",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TransformArgs;

    fn transform_args(key: &str, text: &str) -> TransformArgs {
        TransformArgs {
            key: key.to_string(),
            text: Some(text.to_string()),
            metrics_dir: None,
            no_metrics: true,
        }
    }

    #[test]
    fn transform_applies_the_named_tool() {
        let output = run_transform(&transform_args("upper-case", "hello")).unwrap();
        assert_eq!(output, "HELLO");
    }

    #[test]
    fn transform_surfaces_unknown_keys() {
        let error = run_transform(&transform_args("no-such-tool", "hello")).unwrap_err();
        assert!(error.to_string().contains("no-such-tool"));
    }

    #[test]
    fn transform_records_metrics_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let args = TransformArgs {
            key: "upper-case".to_string(),
            text: Some("hello".to_string()),
            metrics_dir: Some(dir.path().to_path_buf()),
            no_metrics: false,
        };
        let output = run_transform(&args).unwrap();
        assert_eq!(output, "HELLO");
        let events = std::fs::read_to_string(dir.path().join("events.jsonl")).unwrap();
        assert!(events.contains("upper-case"));
    }

    #[test]
    fn validate_single_tool_against_a_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let args = ValidateArgs {
            key: Some("upper-case".to_string()),
            metrics_dir: Some(dir.path().to_path_buf()),
            json: true,
        };
        assert!(run_validate(&args).unwrap());
    }

    #[test]
    fn status_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let args = StatusArgs {
            key: "no-such-tool".to_string(),
            metrics_dir: Some(dir.path().to_path_buf()),
        };
        assert!(run_status(&args).is_err());
    }
}
