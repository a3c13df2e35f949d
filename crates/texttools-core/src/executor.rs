//! The transformation executor.
//!
//! Wraps every leaf invocation in uniform input validation, panic
//! containment, optional wall-clock timeout, and fire-and-forget telemetry.
//! All outcomes surface as `Result<String, TransformError>`; nothing
//! escapes as an unhandled fault.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::debug;

use texttools_model::{
    INPUT_PREVIEW_CHARS, MAX_INPUT_CHARS, Result, TransformError, TransformEvent,
};
use texttools_transform::{Registry, TransformFn, TransformKind};

use crate::telemetry::Telemetry;

/// Executor tuning knobs.
///
/// The timeout is a defensive measure against a pathological leaf; no
/// built-in transform needs it, so the library default is off and the CLI
/// opts in with one second.
#[derive(Debug, Clone)]
pub struct ExecutorOptions {
    /// Input ceiling in characters.
    pub max_input_chars: usize,
    /// Hard wall-clock limit per invocation. `None` runs inline.
    pub timeout: Option<Duration>,
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            max_input_chars: MAX_INPUT_CHARS,
            timeout: None,
        }
    }
}

/// Dispatches transformation requests against an injected registry.
pub struct Executor<'r> {
    registry: &'r Registry,
    options: ExecutorOptions,
    telemetry: Option<Telemetry>,
}

impl<'r> Executor<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            options: ExecutorOptions::default(),
            telemetry: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ExecutorOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Execute the transformation registered under `key` against `text`.
    pub fn execute(&self, text: &str, key: &str) -> Result<String> {
        let descriptor = self
            .registry
            .lookup(key)
            .ok_or_else(|| TransformError::UnknownTransformation {
                key: key.to_string(),
            })?;

        let text = preprocess(text);

        let length = text.chars().count();
        if length > self.options.max_input_chars {
            return Err(TransformError::InputTooLarge {
                length,
                max: self.options.max_input_chars,
            });
        }
        if descriptor.kind == TransformKind::Derived && text.is_empty() {
            return Err(TransformError::EmptyInput);
        }

        let started = Instant::now();
        let output = self
            .invoke(descriptor.func, text)
            .map_err(|error| execution_failure(key, text, &error))?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        if let Some(telemetry) = &self.telemetry {
            telemetry.emit(TransformEvent {
                key: key.to_string(),
                input_len: length,
                output_len: output.chars().count(),
                elapsed_ms,
                created_at: Utc::now(),
            });
        }
        debug!(key, input_len = length, output_len = output.chars().count(), "transformed");
        Ok(output)
    }

    fn invoke(&self, func: TransformFn, text: &str) -> Result<String> {
        match self.options.timeout {
            None => catch_unwind(AssertUnwindSafe(|| func(text)))
                .unwrap_or_else(|payload| Err(panic_message(&*payload))),
            Some(timeout) => invoke_with_timeout(func, text, timeout),
        }
    }
}

/// Input normalization hook. Currently a passthrough; kept as the single
/// place future normalization (line endings, NFC) would land.
fn preprocess(text: &str) -> &str {
    text
}

/// Run the leaf on a helper thread so a pathological implementation cannot
/// stall the caller. On timeout the worker is abandoned; leaves hold no
/// shared state, so it finishes (or spins) in isolation.
fn invoke_with_timeout(func: TransformFn, text: &str, timeout: Duration) -> Result<String> {
    let (tx, rx) = mpsc::channel();
    let input = text.to_string();
    let spawned = thread::Builder::new()
        .name("transform-worker".to_string())
        .spawn(move || {
            let outcome = catch_unwind(AssertUnwindSafe(|| func(&input)));
            let _ = tx.send(outcome);
        });
    if let Err(error) = spawned {
        return Err(TransformError::message(format!(
            "failed to spawn transform worker: {error}"
        )));
    }
    match rx.recv_timeout(timeout) {
        Ok(Ok(result)) => result,
        Ok(Err(payload)) => Err(panic_message(&*payload)),
        Err(_) => Err(TransformError::message(format!(
            "timed out after {}ms",
            timeout.as_millis()
        ))),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> TransformError {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panicked".to_string());
    TransformError::message(detail)
}

/// Attach key and input context to a leaf failure for diagnostics. The
/// input preview is capped so error records stay small.
fn execution_failure(key: &str, text: &str, error: &TransformError) -> TransformError {
    let input_preview: String = text.chars().take(INPUT_PREVIEW_CHARS).collect();
    TransformError::ExecutionFailure {
        key: key.to_string(),
        detail: error.to_string(),
        input_preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texttools_model::ErrorKind;
    use texttools_transform::{Category, TransformDescriptor};

    fn registry() -> Registry {
        Registry::builtin()
    }

    fn sleepy(_: &str) -> Result<String> {
        thread::sleep(Duration::from_millis(250));
        Ok("done".to_string())
    }

    fn explosive(_: &str) -> Result<String> {
        panic!("leaf blew up")
    }

    fn pathological_registry() -> Registry {
        let tool = |key: &'static str, func: TransformFn| TransformDescriptor {
            key,
            label: key,
            category: Category::TextOps,
            kind: TransformKind::Derived,
            func,
        };
        Registry::from_entries(&[tool("sleepy", sleepy), tool("explosive", explosive)])
    }

    #[test]
    fn executes_registered_transform() {
        let registry = registry();
        let executor = Executor::new(&registry);
        assert_eq!(
            executor.execute("hello world", "upper-case").unwrap(),
            "HELLO WORLD"
        );
        assert_eq!(
            executor.execute("Hello World", "snake-case").unwrap(),
            "hello_world"
        );
    }

    #[test]
    fn unknown_key_is_a_caller_error() {
        let registry = registry();
        let executor = Executor::new(&registry);
        let error = executor.execute("x", "not-a-real-key").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownTransformation);
    }

    #[test]
    fn empty_input_rejected_unless_generator() {
        let registry = registry();
        let executor = Executor::new(&registry);
        let error = executor.execute("", "upper-case").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::EmptyInput);

        // Generators synthesize output and accept empty input.
        assert!(executor.execute("", "uuid-generate").is_ok());
        assert!(executor.execute("", "random-hex-color").is_ok());
    }

    #[test]
    fn oversized_input_rejected_for_all_keys() {
        let registry = registry();
        let executor = Executor::new(&registry);
        let big = "x".repeat(MAX_INPUT_CHARS + 1);
        for key in ["upper-case", "uuid-generate"] {
            let error = executor.execute(&big, key).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InputTooLarge, "{key}");
        }
    }

    #[test]
    fn leaf_failure_gets_key_and_preview_context() {
        let registry = registry();
        let executor = Executor::new(&registry);
        let error = executor.execute("not valid base64!!", "base64-decode").unwrap_err();
        match error {
            TransformError::ExecutionFailure {
                key,
                input_preview,
                ..
            } => {
                assert_eq!(key, "base64-decode");
                assert_eq!(input_preview, "not valid base64!!");
            }
            other => panic!("expected ExecutionFailure, got {other:?}"),
        }
    }

    #[test]
    fn preview_is_truncated() {
        let registry = registry();
        let executor = Executor::new(&registry);
        let input = format!("{}!", "a".repeat(300));
        let error = executor.execute(&input, "base64-decode").unwrap_err();
        match error {
            TransformError::ExecutionFailure { input_preview, .. } => {
                assert_eq!(input_preview.chars().count(), INPUT_PREVIEW_CHARS);
            }
            other => panic!("expected ExecutionFailure, got {other:?}"),
        }
    }

    #[test]
    fn fast_leaf_completes_inside_timeout() {
        let registry = registry();
        let executor = Executor::new(&registry).with_options(ExecutorOptions {
            timeout: Some(Duration::from_secs(5)),
            ..ExecutorOptions::default()
        });
        assert_eq!(executor.execute("abc", "reverse-text").unwrap(), "cba");
    }

    #[test]
    fn timeout_elapse_converts_to_execution_failure() {
        let registry = pathological_registry();
        let executor = Executor::new(&registry).with_options(ExecutorOptions {
            timeout: Some(Duration::from_millis(10)),
            ..ExecutorOptions::default()
        });
        let error = executor.execute("hello", "sleepy").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ExecutionFailure);
        assert!(error.to_string().contains("timed out"), "{error}");
    }

    #[test]
    fn leaf_panic_is_contained_as_execution_failure() {
        let registry = pathological_registry();

        // Inline invocation path.
        let executor = Executor::new(&registry);
        let error = executor.execute("hello", "explosive").unwrap_err();
        match error {
            TransformError::ExecutionFailure { key, detail, .. } => {
                assert_eq!(key, "explosive");
                assert!(detail.contains("leaf blew up"));
            }
            other => panic!("expected ExecutionFailure, got {other:?}"),
        }

        // Worker-thread path surfaces panics the same way.
        let timed = Executor::new(&registry).with_options(ExecutorOptions {
            timeout: Some(Duration::from_secs(5)),
            ..ExecutorOptions::default()
        });
        let error = timed.execute("hello", "explosive").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ExecutionFailure);
    }
}
