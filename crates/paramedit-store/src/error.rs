//! Error types for paramedit-store.
//!
//! Store operations themselves never fail; [`EditorError`] covers the session
//! edges: drafts rejected by the add-form gate and JSON serialization.

use paramedit_core::DraftError;
use thiserror::Error;

/// Errors produced by editor session operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A new parameter did not pass the add-form checks.
    #[error("rejected parameter: {0}")]
    Draft(#[from] DraftError),

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
