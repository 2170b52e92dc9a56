//! # Record Store Actor
//!
//! This module defines the `RecordActor`, the task that owns one record collection.
//! It implements the "Server" side of the Actor Model: requests arrive over a channel
//! and are processed one at a time, so each operation sees and leaves the
//! collection in a consistent state.

use crate::client::RecordClient;
use crate::entity::RecordEntity;
use crate::error::StoreError;
use crate::message::RecordRequest;
use crate::query::{apply_query, RecordQuery};
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// The generic store that owns an insertion-ordered collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the collection and the
/// receiver end of the channel; callers only ever hold a [`RecordClient`].
///
/// **Concurrency Model**:
/// The run loop handles one request at a time. A create (build, validate, append)
/// or a replace (build candidate, validate, commit) therefore completes before the
/// next request is looked at, and no `Mutex` is needed around the collection.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `RecordActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client wherever requests are issued.
///
/// # Operations
///
/// * **List**: validates every stored record, then returns the records matching the query.
/// * **Create**: fresh id, timestamp from the clock, initial status; validated before it is appended.
/// * **Get**: returns a validated copy, or `NotFound`.
/// * **Replace**: applies the payload to a copy, validates it, then commits.
/// * **Delete**: removes the record, or `NotFound`.
/// * **Transition**: sets the status on a copy with no transition-graph check, validates, commits.
pub struct RecordActor<T: RecordEntity> {
    receiver: mpsc::Receiver<RecordRequest<T>>,
    store: Vec<T>,
    clock: Clock,
}

impl<T: RecordEntity> RecordActor<T> {
    /// Creates a store stamping records with the system clock.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When it is full, client
    ///   calls wait for space. Zero is treated as 1.
    pub fn new(buffer_size: usize) -> (Self, RecordClient<T>) {
        Self::with_clock(buffer_size, Utc::now)
    }

    /// Creates a store that takes its timestamps from `clock`.
    pub fn with_clock(
        buffer_size: usize,
        clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static,
    ) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            store: Vec::new(),
            clock: Box::new(clock),
        };
        (actor, RecordClient::new(sender))
    }

    /// Runs the store's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "food_orders::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(entity_type, msg);
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn handle(&mut self, entity_type: &str, msg: RecordRequest<T>) {
        match msg {
            RecordRequest::List { query, respond_to } => {
                let result = self.list(&query);
                match &result {
                    Ok(records) => debug!(entity_type, ?query, found = records.len(), "List"),
                    Err(e) => warn!(entity_type, error = %e, "Stored record failed validation"),
                }
                let _ = respond_to.send(result);
            }
            RecordRequest::Create {
                payload,
                respond_to,
            } => {
                debug!(entity_type, ?payload, "Create");
                let result = self.create(payload);
                match &result {
                    Ok(record) => {
                        info!(entity_type, id = %record.id(), size = self.store.len(), "Created")
                    }
                    Err(e) => warn!(entity_type, error = %e, "Create failed"),
                }
                let _ = respond_to.send(result);
            }
            RecordRequest::Get { id, respond_to } => {
                let result = self.get(&id);
                let found = !matches!(result, Err(StoreError::NotFound(_)));
                debug!(entity_type, %id, found, "Get");
                if let Err(e @ StoreError::Validation(_)) = &result {
                    warn!(entity_type, %id, error = %e, "Stored record failed validation");
                }
                let _ = respond_to.send(result);
            }
            RecordRequest::Replace {
                id,
                payload,
                respond_to,
            } => {
                debug!(entity_type, %id, ?payload, "Replace");
                let result = self.replace(&id, payload);
                match &result {
                    Ok(_) => info!(entity_type, %id, "Replaced"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Replace failed"),
                }
                let _ = respond_to.send(result);
            }
            RecordRequest::Delete { id, respond_to } => {
                debug!(entity_type, %id, "Delete");
                let result = self.delete(&id);
                match &result {
                    Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                }
                let _ = respond_to.send(result);
            }
            RecordRequest::Transition {
                id,
                status,
                respond_to,
            } => {
                debug!(entity_type, %id, ?status, "Transition");
                let result = self.transition(&id, status);
                match &result {
                    Ok(_) => info!(entity_type, %id, ?status, "Status changed"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Transition failed"),
                }
                let _ = respond_to.send(result);
            }
        }
    }

    fn position(&self, id: &T::Id) -> Result<usize, StoreError> {
        self.store
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn fresh_id(&self) -> T::Id {
        loop {
            let id = T::Id::from(Uuid::new_v4());
            if self.store.iter().all(|record| record.id() != &id) {
                return id;
            }
        }
    }

    fn list(&self, query: &RecordQuery) -> Result<Vec<T>, StoreError> {
        for record in &self.store {
            record.validate()?;
        }
        Ok(apply_query(&self.store, query))
    }

    fn create(&mut self, payload: T::Payload) -> Result<T, StoreError> {
        let record = T::from_payload(self.fresh_id(), payload, (self.clock)());
        record.validate()?;
        self.store.push(record.clone());
        Ok(record)
    }

    fn get(&self, id: &T::Id) -> Result<T, StoreError> {
        let record = &self.store[self.position(id)?];
        record.validate()?;
        Ok(record.clone())
    }

    fn replace(&mut self, id: &T::Id, payload: T::Payload) -> Result<T, StoreError> {
        let index = self.position(id)?;
        let mut candidate = self.store[index].clone();
        candidate.apply_payload(payload);
        candidate.validate()?;
        self.store[index] = candidate.clone();
        Ok(candidate)
    }

    fn delete(&mut self, id: &T::Id) -> Result<(), StoreError> {
        let index = self.position(id)?;
        self.store.remove(index);
        Ok(())
    }

    fn transition(&mut self, id: &T::Id, status: T::Status) -> Result<T, StoreError> {
        let index = self.position(id)?;
        let mut candidate = self.store[index].clone();
        candidate.set_status(status);
        candidate.validate()?;
        self.store[index] = candidate.clone();
        Ok(candidate)
    }
}
