//! # System Lifecycle
//!
//! Starts the order and schedule stores, hands out their clients and shuts
//! them down.
//!
//! ## Startup
//!
//! [`FoodSystem::new`] checks the [`SystemConfig`](crate::config::SystemConfig), creates both stores
//! and spawns each one on its own Tokio task. The two stores are independent:
//! neither holds a client of the other, so they can start in any order.
//!
//! ## Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of both channels
//! 2. **Stores detect closure** - `receiver.recv()` returns `None`
//! 3. **Stores finish** - requests already queued are answered, then the final
//!    record count is logged
//! 4. **Await completion** - [`FoodSystem::shutdown`] joins both tasks
//!
//! Clones of a client handed out earlier keep their store alive, so
//! `shutdown` only returns once every clone has been dropped.
//!
//! ## Tracing
//!
//! Call [`setup_tracing`](record_framework::tracing::setup_tracing) once
//! before building the system:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod food_system;

pub use food_system::*;
