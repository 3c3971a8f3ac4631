// src/error.rs
// Standardized error types for Holocron

use thiserror::Error;

/// Main error type for the Holocron library.
///
/// This is a closed taxonomy: the store and the catalog gateway only ever
/// return these variants, and the dispatch layer converts them into the
/// uniform response envelope. Nothing above dispatch matches on this type.
#[derive(Error, Debug)]
pub enum HolocronError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("persistence failure: {0}")]
    Persistence(String),
}

/// Convenience type alias for Result using HolocronError
pub type Result<T> = std::result::Result<T, HolocronError>;

impl HolocronError {
    /// Stable tag used as `error_kind` in response envelopes.
    pub fn kind(&self) -> &'static str {
        match self {
            HolocronError::Validation(_) => "validation_error",
            HolocronError::NotFound(_) => "not_found",
            HolocronError::Unavailable(_) => "unavailable",
            HolocronError::DuplicateEntry(_) => "duplicate_entry",
            HolocronError::Persistence(_) => "persistence_error",
        }
    }

    /// Whether a caller may reasonably retry the operation.
    ///
    /// Only transient catalog failures qualify; the core never retries
    /// internally.
    pub fn retryable(&self) -> bool {
        matches!(self, HolocronError::Unavailable(_))
    }
}

impl From<HolocronError> for String {
    fn from(err: HolocronError) -> Self {
        err.to_string()
    }
}
