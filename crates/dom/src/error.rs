//! Error types for document model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("invalid attribute name '{name}' on {type_name}")]
    InvalidAttributeName {
        type_name: &'static str,
        name: String,
    },

    #[error("invalid value for attribute '{name}' on {type_name}")]
    InvalidAttributeValue {
        type_name: &'static str,
        name: String,
    },

    #[error("document is already bound to a different renderer")]
    RendererConflict,

    #[error("style '{style}' has a malformed base chain: {reason}")]
    MalformedStyleChain { style: String, reason: String },
}

pub type Result<T> = std::result::Result<T, DomError>;
