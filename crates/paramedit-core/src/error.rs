//! Core error types for paramedit-core.
//!
//! Reconciliation and record editing are total, so these only cover the
//! fallible edges: parsing host-supplied data and the add-form gate.

use thiserror::Error;

/// Errors produced while reading host-supplied parameter data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A parameter type name outside `string`, `number`, `select`.
    #[error("unknown parameter type: '{name}'")]
    UnknownParamType { name: String },

    /// A dataset document could not be parsed.
    #[error("invalid dataset: {0}")]
    Dataset(#[from] serde_json::Error),
}

/// Reasons a parameter draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("parameter name must not be blank")]
    EmptyName,

    #[error("parameter value must not be blank")]
    EmptyValue,

    /// Select parameters have no free-form value to submit.
    #[error("select parameters cannot be added from the form")]
    SelectNotSubmittable,
}
