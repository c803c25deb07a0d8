//! Error types for mt-report.

use thiserror::Error;

/// Errors that can occur when rendering the pricing table.
///
/// The only fallible operation is the write to the output sink; a failed
/// stdout write is unrecoverable and callers should treat it as fatal.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, ReportError>`.
pub type ReportResult<T> = Result<T, ReportError>;
