//! Error types for the web front end.
//!
//! Only binding and serving can fail. Config problems fall back to defaults
//! in [`crate::config::WebConfig::load_or_default`], and route handlers turn
//! every [`varasto_core::CoreError`] into a flash message.

use thiserror::Error;

/// Web server errors.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WebResult<T> = Result<T, WebError>;
