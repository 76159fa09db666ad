//! Error types for kac-notes using thiserror.
//!
//! The extraction and bucketing pipeline is total and has no error type of
//! its own. Only emitting the payload can fail.

use thiserror::Error;

/// Errors from rendering or writing the changelog payload.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Serialized payload is not valid UTF-8: {0}")]
    Encoding(#[source] std::string::FromUtf8Error),

    #[error("Failed to write payload: {0}")]
    Write(#[source] std::io::Error),
}
