//! Error types for tsbuild-core

use thiserror::Error;

/// Errors that can occur during the build sequence
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Failed to copy '{from}' into '{to}': {source}")]
    CopyFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}
