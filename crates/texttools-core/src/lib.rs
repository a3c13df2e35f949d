//! Transformation executor for texttools.
//!
//! - **executor**: input rules, dispatch, panic containment, timeout
//! - **telemetry**: non-blocking analytics channel and writer thread

pub mod executor;
pub mod telemetry;

pub use executor::{Executor, ExecutorOptions};
pub use telemetry::{DEFAULT_QUEUE_DEPTH, Telemetry, TelemetryWorker};
