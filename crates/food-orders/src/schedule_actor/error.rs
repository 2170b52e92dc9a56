//! Error types for the kitchen Schedule service.

use record_framework::{StoreError, ValidationErrors};
use thiserror::Error;

/// Errors that can occur during schedule operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScheduleError {
    /// The requested schedule was not found.
    #[error("Resource with ID {0} not found")]
    NotFound(String),

    /// The schedule data provided (or stored) is invalid.
    #[error("Schedule validation error: {0}")]
    ValidationError(ValidationErrors),

    /// An error occurred while communicating with the schedule store.
    #[error("Store communication error: {0}")]
    ActorCommunicationError(String),
}

impl ScheduleError {
    /// HTTP status a boundary layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ScheduleError::NotFound(_) => 404,
            ScheduleError::ValidationError(_) => 422,
            ScheduleError::ActorCommunicationError(_) => 503,
        }
    }
}

impl From<StoreError> for ScheduleError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ScheduleError::NotFound(id),
            StoreError::Validation(errors) => ScheduleError::ValidationError(errors),
            other => ScheduleError::ActorCommunicationError(other.to_string()),
        }
    }
}
