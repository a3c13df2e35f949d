use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum input length accepted by the executor, in characters.
pub const MAX_INPUT_CHARS: usize = 50_000;

/// Number of input characters retained in error context for diagnostics.
pub const INPUT_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Error)]
pub enum TransformError {
    #[error("unknown transformation: {key}")]
    UnknownTransformation { key: String },

    #[error("input text is empty")]
    EmptyInput,

    #[error("input exceeds {max} characters (got {length})")]
    InputTooLarge { length: usize, max: usize },

    #[error("transformation {key} failed: {detail}")]
    ExecutionFailure {
        key: String,
        detail: String,
        input_preview: String,
    },

    /// Failure raised inside a transformation leaf, before the executor has
    /// attached key/input context. The executor converts this into
    /// `ExecutionFailure`; it never reaches callers of `execute`.
    #[error("{0}")]
    Message(String),
}

impl TransformError {
    /// Build a leaf-level failure message.
    pub fn message(detail: impl Into<String>) -> Self {
        Self::Message(detail.into())
    }

    /// Stable error classification for serialization and status mapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownTransformation { .. } => ErrorKind::UnknownTransformation,
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::InputTooLarge { .. } => ErrorKind::InputTooLarge,
            Self::ExecutionFailure { .. } | Self::Message(_) => ErrorKind::ExecutionFailure,
        }
    }
}

/// Stable, serializable classification of transformation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnknownTransformation,
    EmptyInput,
    InputTooLarge,
    ExecutionFailure,
}

pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classification() {
        assert_eq!(
            TransformError::UnknownTransformation {
                key: "nope".to_string()
            }
            .kind(),
            ErrorKind::UnknownTransformation
        );
        assert_eq!(TransformError::EmptyInput.kind(), ErrorKind::EmptyInput);
        assert_eq!(
            TransformError::InputTooLarge {
                length: 50_001,
                max: MAX_INPUT_CHARS
            }
            .kind(),
            ErrorKind::InputTooLarge
        );
        assert_eq!(
            TransformError::message("bad digit").kind(),
            ErrorKind::ExecutionFailure
        );
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::InputTooLarge).expect("serialize kind");
        assert_eq!(json, "\"input_too_large\"");
    }
}
