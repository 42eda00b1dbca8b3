//! Store error types.

use thiserror::Error;

use crate::Id;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: Id },

    #[error("username already exists: {0}")]
    DuplicateUsername(String),

    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: Id) -> Self {
        Self::NotFound { kind, id }
    }
}
