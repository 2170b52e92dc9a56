//! RecordEntity trait implementation for the Order domain type.
//!
//! This module contains the [`RecordEntity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`record_framework::RecordActor`].
//!
//! Orders start in [`OrderStatus::Created`]; the list filter's status class is
//! [`OrderStatus::Cancelled`] and its time bound reads `created`.

use crate::model::{validate_items, Order, OrderCreate, OrderId, OrderStatus};
use chrono::{DateTime, Utc};
use record_framework::{RecordEntity, ValidationErrors};

impl RecordEntity for Order {
    type Id = OrderId;
    type Payload = OrderCreate;
    type Status = OrderStatus;

    const STATUS_CLASS: OrderStatus = OrderStatus::Cancelled;

    /// Creates a new Order in `created` status.
    fn from_payload(id: OrderId, payload: OrderCreate, stamped: DateTime<Utc>) -> Self {
        Self {
            id,
            created: stamped,
            status: OrderStatus::Created,
            items: payload.items,
        }
    }

    /// Replaces the order lines; id, `created` and status are kept.
    fn apply_payload(&mut self, payload: OrderCreate) {
        self.items = payload.items;
    }

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_items(&self.items, &mut errors);
        errors.into_result()
    }
}
