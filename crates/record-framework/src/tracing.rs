//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup and shutdown, with the final collection size
//! - **Operations**: List, Create, Get, Replace, Delete and Transition, keyed by `entity_type` and `id`
//! - **Failures**: `NotFound` and validation failures at `warn`, with the field errors
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Full payloads and query parameters
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` an order's life reads:
//!
//! ```text
//! INFO Created entity_type="Order" id=5b0f… size=1
//! INFO Status changed entity_type="Order" id=5b0f… status=Progress
//! INFO Created entity_type="Schedule" id=a41c… size=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber.
///
/// `RUST_LOG` wins when it is set; otherwise `default_directive` (e.g. `"info"`)
/// is used.
pub fn setup_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the store
        .compact()
        .init();
}
