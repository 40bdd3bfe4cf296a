//! Error types for wavemix

use thiserror::Error;

/// Result type alias for wavemix operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wavemix
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (short read, failed write)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrong container magic, or mix inputs that do not match
    #[error("Format mismatch: {0}")]
    FormatMismatch(String),

    /// Declared chunk sizes contradict the container
    #[error("Size inconsistency: {0}")]
    SizeInconsistency(String),

    /// Well-formed input using codec parameters this library does not handle
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Sample memory could not be obtained
    #[error("Allocation of {0} bytes failed")]
    Allocation(u64),

    /// Initialization error
    #[error("Initialization error: {0}")]
    Init(String),
}

impl Error {
    /// Create a format mismatch error
    pub fn format_mismatch<S: Into<String>>(msg: S) -> Self {
        Error::FormatMismatch(msg.into())
    }

    /// Create a size inconsistency error
    pub fn size_inconsistency<S: Into<String>>(msg: S) -> Self {
        Error::SizeInconsistency(msg.into())
    }

    /// Create an unsupported error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::Unsupported(msg.into())
    }
}
