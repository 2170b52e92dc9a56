//! Kitchen preparation schedules.

use crate::model::{Order, OrderItem};
use chrono::{DateTime, Utc};
use record_framework::RecordQuery;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleId(pub Uuid);

impl From<Uuid> for ScheduleId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl Display for ScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Preparation status of a schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Pending,
    Progress,
    Cancelled,
    Dispatched,
    Delivered,
}

/// A kitchen schedule entry.
///
/// # Record Framework
/// Managed by a [`RecordActor`](record_framework::RecordActor) through
/// [`impl RecordEntity for Schedule`](#impl-RecordEntity-for-Schedule).
/// `scheduled` is stamped by the store when the entry is created and survives replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub scheduled: DateTime<Utc>,
    pub status: ScheduleStatus,
    #[serde(rename = "order")]
    pub items: Vec<OrderItem>,
}

/// Payload for scheduling an order, or replacing a schedule's lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleCreate {
    #[serde(rename = "order")]
    pub items: Vec<OrderItem>,
}

impl ScheduleCreate {
    pub fn new(items: Vec<OrderItem>) -> Self {
        Self { items }
    }
}

impl From<&Order> for ScheduleCreate {
    /// Copies the order's lines into a kitchen schedule payload.
    fn from(order: &Order) -> Self {
        Self {
            items: order.items.clone(),
        }
    }
}

/// Query parameters accepted when listing schedules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleQuery {
    /// `true`: only schedules in progress; `false`: everything else.
    pub progress: Option<bool>,
    /// Only schedules stamped at or after this instant.
    pub since: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
}

impl From<ScheduleQuery> for RecordQuery {
    fn from(query: ScheduleQuery) -> Self {
        RecordQuery {
            status_class: query.progress,
            since: query.since,
            limit: query.limit,
        }
    }
}

/// Response envelope for a list of schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleList {
    pub schedules: Vec<Schedule>,
}

/// Response body of the schedule status lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStatusView {
    pub status: ScheduleStatus,
}
