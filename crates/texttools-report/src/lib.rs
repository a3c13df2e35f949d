//! Metrics sinks for the texttools engine.
//!
//! - **fs**: JSON-file sink (events, audits, latest snapshot, certificates)
//! - **memory**: in-memory sink for tests
//! - **certificate**: all-green certificate issuance
//! - **hash**: SHA-256 helpers

pub mod certificate;
pub mod fs;
pub mod hash;
pub mod memory;

pub use certificate::{VALIDITY_HOURS, issue_certificate};
pub use fs::{FsSink, LATEST_TTL_MINUTES};
pub use memory::MemorySink;
