//! Error types for the Order service.

use record_framework::{StoreError, ValidationErrors};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order with ID {0} not found")]
    NotFound(String),

    /// The order data provided (or stored) is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(ValidationErrors),

    /// An error occurred while communicating with the order store.
    #[error("Store communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// HTTP status a boundary layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            OrderError::NotFound(_) => 404,
            OrderError::ValidationError(_) => 422,
            OrderError::ActorCommunicationError(_) => 503,
        }
    }
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            StoreError::Validation(errors) => OrderError::ValidationError(errors),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
