//! Domain wrappers around [`RecordClient`](record_framework::RecordClient).

pub mod order_client;
pub mod schedule_client;

pub use order_client::*;
pub use schedule_client::*;
