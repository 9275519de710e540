//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while validating an [`OfficeConfig`][crate::OfficeConfig].
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("closing hour {closing} is before opening hour {opening}")]
    ClosingBeforeOpening { opening: f64, closing: f64 },

    #[error("{what} must be a finite number, got {value}")]
    NotFinite { what: &'static str, value: f64 },

    #[error("the office needs at least one worker")]
    NoWorkers,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `office-core`.
pub type CoreResult<T> = Result<T, CoreError>;
