//! Record types and payloads. The store-facing behaviour of [`Order`] and
//! [`Schedule`] lives in [`order_actor`](crate::order_actor) and
//! [`schedule_actor`](crate::schedule_actor).

pub mod item;
pub mod order;
pub mod schedule;

pub use item::*;
pub use order::*;
pub use schedule::*;
