//! Enhancement Errors
//!
//! Failures while binding behaviors to the page. All of them are startup
//! precondition failures except `SubmitFailed`.

use serde::{Deserialize, Serialize};

/// Common result type for enhancement operations
pub type EnhanceResult<T> = Result<T, EnhanceError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnhanceError {
    NoWindow,
    NoDocument,
    /// No element matched the selector
    MissingElement(String),
    /// An element matched but is not the expected kind (e.g. not an `<input>`)
    WrongElementType(String),
    /// The browser rejected the selector
    InvalidSelector(String),
    ListenerFailed(String),
    SubmitFailed(String),
}

impl std::fmt::Display for EnhanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnhanceError::NoWindow => write!(f, "No global window"),
            EnhanceError::NoDocument => write!(f, "Window has no document"),
            EnhanceError::MissingElement(sel) => write!(f, "Missing element: {}", sel),
            EnhanceError::WrongElementType(sel) => write!(f, "Wrong element type: {}", sel),
            EnhanceError::InvalidSelector(sel) => write!(f, "Invalid selector: {}", sel),
            EnhanceError::ListenerFailed(msg) => write!(f, "Failed to add listener: {}", msg),
            EnhanceError::SubmitFailed(msg) => write!(f, "Form submit failed: {}", msg),
        }
    }
}

impl std::error::Error for EnhanceError {}
