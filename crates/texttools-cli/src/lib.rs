//! Library components for the texttools CLI.

pub mod logging;
