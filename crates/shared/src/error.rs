use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardErrorKind {
    Unavailable,
    PermissionDenied,
    WriteFailed,
}

#[derive(Debug, Error)]
#[error("clipboard {kind:?}: {message}")]
pub struct ClipboardError {
    pub kind: ClipboardErrorKind,
    pub message: String,
}

impl ClipboardError {
    pub fn new(kind: ClipboardErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIntentError {
    #[error("empty intent")]
    Empty,
    #[error("unknown intent '{0}'")]
    UnknownVerb(String),
    #[error("intent '{verb}' expects an argument")]
    MissingArgument { verb: &'static str },
    #[error("intent '{verb}' expects an index, got '{value}'")]
    InvalidIndex { verb: &'static str, value: String },
    #[error("malformed json intent: {0}")]
    Json(String),
}
