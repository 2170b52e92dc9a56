//! # RecordEntity Trait
//!
//! The `RecordEntity` trait is the contract every stored record (Order, Schedule, …)
//! implements to be managed by the generic [`RecordActor`](crate::RecordActor).
//!
//! The store never looks inside a record. Everything it needs is reached through
//! this trait:
//!
//! - how to build a record from a payload (fresh id, server-side timestamp,
//!   initial status),
//! - how a replace payload overwrites the record's caller-owned fields,
//! - which status the list filter's class flag compares against,
//! - which timestamp the `since` filter reads,
//! - how the record validates itself.
//!
//! Associated types keep the two stores apart at compile time: an `OrderCreate`
//! payload cannot be sent to the schedule store.

use crate::validation::ValidationErrors;
use chrono::{DateTime, Utc};
use std::fmt::{Debug, Display};
use uuid::Uuid;

/// Trait that any record must implement to be managed by [`RecordActor`](crate::RecordActor).
///
/// The store owns id generation and time stamping; the record decides what its
/// initial status is and which of its fields a payload may touch.
pub trait RecordEntity: Clone + Send + Sync + Debug + 'static {
    /// Unique identifier. Generated by the store from a random UUID.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<Uuid>;

    /// Caller-supplied content for create and replace. Carries no id,
    /// timestamp or status.
    type Payload: Clone + Send + Sync + Debug;

    /// Status vocabulary of this record kind.
    type Status: Copy + Eq + Send + Sync + Debug;

    /// Status value selected by the list query's status-class flag.
    const STATUS_CLASS: Self::Status;

    /// Builds a new record in its initial status.
    fn from_payload(id: Self::Id, payload: Self::Payload, stamped: DateTime<Utc>) -> Self;

    /// Overwrites every caller-owned field from `payload`. Id, timestamp and
    /// status stay as they are.
    fn apply_payload(&mut self, payload: Self::Payload);

    fn id(&self) -> &Self::Id;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);

    /// Timestamp compared against the query's `since` bound.
    fn timestamp(&self) -> DateTime<Utc>;

    /// Checks the record's invariants.
    fn validate(&self) -> Result<(), ValidationErrors>;
}
