//! # Store Errors
//!
//! Common error type returned by every [`RecordClient`](crate::RecordClient) call.
//! Domain clients map it into their own error enums.

use crate::validation::ValidationErrors;

/// Errors that can occur within the record store itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    ActorClosed,
    #[error("Store dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}
