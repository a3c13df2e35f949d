//! Fire-and-forget analytics plumbing.
//!
//! Successful transformations emit a `TransformEvent` into a bounded
//! channel drained by a background writer thread. The emit side never
//! blocks: a full queue or a dead writer drops the event with a debug log.
//! Persistence can lag, fail, or be absent without ever affecting a
//! transformation result.

use std::sync::Arc;
use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use tracing::debug;

use texttools_model::{MetricsSink, TransformEvent};

/// Default queue depth before events are dropped.
pub const DEFAULT_QUEUE_DEPTH: usize = 256;

/// Cloneable emit handle for the telemetry channel.
#[derive(Clone)]
pub struct Telemetry {
    tx: SyncSender<TransformEvent>,
}

impl Telemetry {
    /// Spawn a writer thread draining events into `sink`.
    ///
    /// The worker exits once every `Telemetry` clone has been dropped and
    /// the queue is empty.
    pub fn spawn(sink: Arc<dyn MetricsSink>) -> std::io::Result<(Self, TelemetryWorker)> {
        Self::spawn_with_depth(sink, DEFAULT_QUEUE_DEPTH)
    }

    pub fn spawn_with_depth(
        sink: Arc<dyn MetricsSink>,
        depth: usize,
    ) -> std::io::Result<(Self, TelemetryWorker)> {
        let (tx, rx) = mpsc::sync_channel(depth);
        let handle = thread::Builder::new()
            .name("telemetry-writer".to_string())
            .spawn(move || {
                while let Ok(event) = rx.recv() {
                    sink.record_event(&event);
                }
            })?;
        Ok((Self { tx }, TelemetryWorker { handle }))
    }

    /// Hand an event to the writer without blocking.
    pub fn emit(&self, event: TransformEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                debug!(key = %event.key, "telemetry queue full, event dropped");
            }
            Err(TrySendError::Disconnected(event)) => {
                debug!(key = %event.key, "telemetry writer gone, event dropped");
            }
        }
    }
}

/// Join handle for the writer thread; drop the emit handles first, then
/// `join` to flush remaining events at shutdown.
pub struct TelemetryWorker {
    handle: JoinHandle<()>,
}

impl TelemetryWorker {
    pub fn join(self) {
        let _ = self.handle.join();
    }
}
