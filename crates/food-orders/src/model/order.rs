//! Customer orders.

use crate::model::OrderItem;
use chrono::{DateTime, Utc};
use record_framework::RecordQuery;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Progress,
    Cancelled,
    Dispatched,
    Delivered,
}

/// Represents a customer order.
///
/// # Record Framework
/// This struct implements the [`RecordEntity`](record_framework::RecordEntity) trait,
/// allowing it to be managed by a [`RecordActor`](record_framework::RecordActor).
///
/// See [`impl RecordEntity for Order`](#impl-RecordEntity-for-Order) for details on:
/// - Create/replace payload ([`OrderCreate`])
/// - Status vocabulary ([`OrderStatus`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub created: DateTime<Utc>,
    pub status: OrderStatus,
    #[serde(rename = "order")]
    pub items: Vec<OrderItem>,
}

/// Payload for creating or replacing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderCreate {
    #[serde(rename = "order")]
    pub items: Vec<OrderItem>,
}

impl OrderCreate {
    pub fn new(items: Vec<OrderItem>) -> Self {
        Self { items }
    }
}

/// Query parameters accepted when listing orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuery {
    /// `true`: only cancelled orders; `false`: only orders that are not cancelled.
    pub cancelled: Option<bool>,
    /// Only orders created at or after this instant.
    pub since: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
}

impl From<OrderQuery> for RecordQuery {
    fn from(query: OrderQuery) -> Self {
        RecordQuery {
            status_class: query.cancelled,
            since: query.since,
            limit: query.limit,
        }
    }
}

/// Response envelope for a list of orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderList {
    pub orders: Vec<Order>,
}
