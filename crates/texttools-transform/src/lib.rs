//! Text transformation leaves and the static key registry.
//!
//! This crate provides the transformation implementations for texttools:
//!
//! - **case**: case conversions and separator-style rewrites
//! - **encode**: encode/decode pairs and classical ciphers
//! - **textops**: line- and word-level operations
//! - **analyze**: counting and measurement
//! - **style**: Unicode styled alphabets
//! - **visual**: enclosed alphabets, flipping, novelty rewrites
//! - **generate**: generators exempt from the empty-input rule
//! - **registry**: the fixed key -> implementation table
//!
//! All leaves are pure functions `fn(&str) -> Result<String>`; input
//! validation (empty input, size ceiling) is the executor's job in
//! `texttools-core`, not the leaves'.

pub mod analyze;
pub mod case;
pub mod encode;
pub mod generate;
pub mod registry;
pub mod style;
pub mod textops;
pub mod visual;

pub use registry::{Category, Registry, TransformDescriptor, TransformFn, TransformKind};
