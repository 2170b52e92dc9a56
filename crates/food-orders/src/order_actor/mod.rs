//! # Order Actor
//!
//! The orders service: one [`RecordActor`] holding [`Order`] records.
//!
//! ## Structure
//!
//! - [`entity`] - [`RecordEntity`](record_framework::RecordEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store and client
//!
//! ## Usage
//!
//! ```rust
//! use food_orders::order_actor;
//! use food_orders::model::{OrderCreate, OrderItem, Size};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let params = OrderCreate::new(vec![OrderItem::new("Pizza", Size::Medium, 2)]);
//!     let order = client.create_order(params).await?;
//!     client.pay(order.id).await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use chrono::{DateTime, Utc};
use record_framework::RecordActor;

/// Creates a new Order store and its client.
pub fn new(buffer_size: usize) -> (RecordActor<Order>, OrderClient) {
    let (actor, generic_client) = RecordActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}

/// Like [`new`], with `created` timestamps taken from `clock`.
pub fn with_clock(
    buffer_size: usize,
    clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static,
) -> (RecordActor<Order>, OrderClient) {
    let (actor, generic_client) = RecordActor::with_clock(buffer_size, clock);
    (actor, OrderClient::new(generic_client))
}
