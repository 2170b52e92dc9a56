//! # RecordService Trait
//!
//! Common interface for domain clients (an order client, a schedule client, …). A
//! wrapper supplies its inner [`RecordClient`] and an error mapping, and inherits
//! `list`, `get`, `create`, `replace`, `delete` and `transition` with tracing spans
//! already attached.
use crate::{RecordClient, RecordEntity, RecordQuery, StoreError};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard store operations.
///
/// # Example
///
/// ```rust
/// use record_framework::{RecordClient, RecordEntity, RecordService, StoreError, ValidationErrors};
/// use async_trait::async_trait;
/// use chrono::{DateTime, Utc};
/// use uuid::Uuid;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: Uuid, at: DateTime<Utc>, done: bool, text: String }
///
/// impl RecordEntity for Note {
///     type Id = Uuid;
///     type Payload = String;
///     type Status = bool;
///     const STATUS_CLASS: bool = true;
///     fn from_payload(id: Uuid, text: String, at: DateTime<Utc>) -> Self {
///         Self { id, at, done: false, text }
///     }
///     fn apply_payload(&mut self, text: String) { self.text = text; }
///     fn id(&self) -> &Uuid { &self.id }
///     fn status(&self) -> bool { self.done }
///     fn set_status(&mut self, done: bool) { self.done = done; }
///     fn timestamp(&self) -> DateTime<Utc> { self.at }
///     fn validate(&self) -> Result<(), ValidationErrors> { Ok(()) }
/// }
///
/// #[derive(Debug)]
/// struct NoteError(String);
///
/// struct NoteClient { inner: RecordClient<Note> }
///
/// #[async_trait]
/// impl RecordService<Note> for NoteClient {
///     type Error = NoteError;
///     fn inner(&self) -> &RecordClient<Note> { &self.inner }
///     fn map_error(e: StoreError) -> NoteError { NoteError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient, id: Uuid) {
///     // list(), get(), replace(), delete() … are provided automatically.
///     let _ = client.get(id).await;
///     let _ = client.delete(id).await;
/// }
/// ```
#[async_trait]
pub trait RecordService<T: RecordEntity>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic RecordClient.
    fn inner(&self) -> &RecordClient<T>;

    /// Map store errors to the domain error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// List records matching `query`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: RecordQuery) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Create a record from `payload`.
    #[tracing::instrument(skip(self))]
    async fn create(&self, payload: T::Payload) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().create(payload).await.map_err(Self::map_error)
    }

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Replace a record's caller-owned fields.
    #[tracing::instrument(skip(self))]
    async fn replace(&self, id: T::Id, payload: T::Payload) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().replace(id, payload).await.map_err(Self::map_error)
    }

    /// Delete a record by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Move a record to `status`, whatever its current status is.
    #[tracing::instrument(skip(self))]
    async fn transition(&self, id: T::Id, status: T::Status) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().transition(id, status).await.map_err(Self::map_error)
    }
}
