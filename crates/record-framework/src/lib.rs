//! # Record Framework
//!
//! Building blocks for in-memory record services: a generic store that owns a
//! collection of records, a cloneable client for talking to it, the query engine
//! behind filtered reads, and the validation types every record reports through.
//!
//! ## Why one generic store?
//!
//! An order service and a kitchen schedule service look different from the
//! outside, with different fields and different status words, but their stores
//! behave identically: list with filters, create, get, replace, delete, and move
//! a record to a new status. The differences live in the record type, behind
//! [`RecordEntity`]; the store is written once as [`RecordActor<T>`].
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`RecordEntity`]) - fields, initial status, payload handling, validation
//! 2. **Store Layer** ([`RecordActor`]) - owns the collection, processes requests sequentially
//! 3. **Interface Layer** ([`RecordClient`], [`RecordService`]) - typed async calls
//!
//! Reads ([`RecordQuery`], [`apply_query`]) return owned snapshots, so later writes
//! never show through a result a caller already holds.
//!
//! ## Concurrency
//!
//! Each store runs in its own Tokio task and handles one request at a time. A
//! multi-step operation such as create → validate → append finishes before the next
//! request is looked at. Dropping every client ends the task.
//!
//! ```rust
//! use record_framework::{RecordActor, RecordEntity, RecordQuery, ValidationErrors};
//! use chrono::{DateTime, Utc};
//! use uuid::Uuid;
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: Uuid, at: DateTime<Utc>, done: bool, text: String }
//!
//! impl RecordEntity for Note {
//!     type Id = Uuid;
//!     type Payload = String;
//!     type Status = bool;
//!     const STATUS_CLASS: bool = true;
//!
//!     fn from_payload(id: Uuid, text: String, at: DateTime<Utc>) -> Self {
//!         Self { id, at, done: false, text }
//!     }
//!     fn apply_payload(&mut self, text: String) { self.text = text; }
//!     fn id(&self) -> &Uuid { &self.id }
//!     fn status(&self) -> bool { self.done }
//!     fn set_status(&mut self, done: bool) { self.done = done; }
//!     fn timestamp(&self) -> DateTime<Utc> { self.at }
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         let mut errors = ValidationErrors::new();
//!         if self.text.is_empty() {
//!             errors.push("text", "must not be empty");
//!         }
//!         errors.into_result()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = RecordActor::<Note>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let note = client.create("buy flour".to_string()).await.unwrap();
//!     client.transition(note.id, true).await.unwrap();
//!
//!     let done = client.list(RecordQuery::new().status_class(true)).await.unwrap();
//!     assert_eq!(done.len(), 1);
//!     assert!(client.create(String::new()).await.is_err());
//! }
//! ```
//!
//! ## Testing
//!
//! See [`mock`] for testing client wrappers without a running store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod query;
pub mod tracing;
pub mod validation;

pub use actor::RecordActor;
pub use client::RecordClient;
pub use client_trait::RecordService;
pub use entity::RecordEntity;
pub use error::StoreError;
pub use message::{RecordRequest, Response};
pub use query::{apply_query, RecordQuery};
pub use validation::{FieldError, ValidationErrors};
