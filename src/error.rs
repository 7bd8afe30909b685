//! Expected-failure errors for application code
//!
//! `AppError` is the distinguished kind for anticipated, user-facing
//! failures (bad option value, missing input). It propagates unmodified
//! through the app lifecycle and is handled only at the entry point, which
//! prints the message and exits non-zero. Programming defects are not
//! modeled here; they panic.

use thiserror::Error;

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Runtime(String),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) | AppError::InvalidArgs(_) => crate::exitcode::USAGE,
            AppError::Runtime(_) => crate::exitcode::SOFTWARE,
            AppError::Io { .. } => crate::exitcode::IOERR,
        }
    }
}
