//! # Schedule Actor
//!
//! The kitchen service: one [`RecordActor`] holding [`Schedule`] records.
//!
//! ## Structure
//!
//! - [`entity`] - [`RecordEntity`](record_framework::RecordEntity) implementation for [`Schedule`]
//! - [`error`] - [`ScheduleError`] type
//! - [`new()`] - Factory function that creates the store and client
//!
//! Besides the shared store operations, the kitchen exposes `cancel`, `advance`
//! (status `progress`) and a status-only lookup through
//! [`ScheduleClient`](crate::clients::ScheduleClient).

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ScheduleClient;
use crate::model::Schedule;
use chrono::{DateTime, Utc};
use record_framework::RecordActor;

/// Creates a new Schedule store and its client.
pub fn new(buffer_size: usize) -> (RecordActor<Schedule>, ScheduleClient) {
    let (actor, generic_client) = RecordActor::new(buffer_size);
    (actor, ScheduleClient::new(generic_client))
}

/// Like [`new`], with `scheduled` timestamps taken from `clock`.
pub fn with_clock(
    buffer_size: usize,
    clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static,
) -> (RecordActor<Schedule>, ScheduleClient) {
    let (actor, generic_client) = RecordActor::with_clock(buffer_size, clock);
    (actor, ScheduleClient::new(generic_client))
}
