use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by the journal layer.
///
/// Read-side store failures never appear here; readers degrade to empty or
/// default values so a corrupt record cannot take the journal down.
#[derive(Error, Debug)]
pub enum JournalError {
    /// Reflection content was empty (or whitespace only) at save time.
    #[error("reflection content must not be empty")]
    EmptyContent,

    /// A reminder time that is not 24-hour `HH:MM`.
    #[error("invalid reminder time {0:?}, expected HH:MM")]
    InvalidReminderTime(String),

    /// The backing store rejected a write.
    #[error("storage write failed: {0}")]
    StorageWrite(#[from] StoreError),

    /// Serialization error.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JournalError>;
