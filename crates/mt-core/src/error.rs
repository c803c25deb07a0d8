//! Workspace error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `MtError` via `From` impls, or keep them separate and wrap `MtError` as
//! one variant. Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `mt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MtError {
    #[error("configuration error: {0}")]
    Config(String),

    /// A transit-time computation received a speed the fare generator can
    /// never produce (non-positive or non-finite).
    #[error("invalid cruise speed: {0} km/s")]
    InvalidSpeed(f64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `mt-*` crates.
pub type MtResult<T> = Result<T, MtError>;
