//! # Generic Client
//!
//! This module defines the generic client for communicating with a record store.

use crate::entity::RecordEntity;
use crate::error::StoreError;
use crate::message::{RecordRequest, Response};
use crate::query::RecordQuery;
use tokio::sync::{mpsc, oneshot};

/// ## RecordClient
///
/// The `RecordClient<T>` is the async handle to a `RecordActor<T>`. Each call sends one
/// request over the store's mpsc channel and waits for the answer on a oneshot channel.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Shutdown** – once every clone is dropped the store's run loop ends.
#[derive(Clone)]
pub struct RecordClient<T: RecordEntity> {
    sender: mpsc::Sender<RecordRequest<T>>,
}

impl<T: RecordEntity> RecordClient<T> {
    pub fn new(sender: mpsc::Sender<RecordRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> RecordRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn list(&self, query: RecordQuery) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| RecordRequest::List { query, respond_to })
            .await
    }

    pub async fn create(&self, payload: T::Payload) -> Result<T, StoreError> {
        self.request(|respond_to| RecordRequest::Create {
            payload,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, StoreError> {
        self.request(|respond_to| RecordRequest::Get { id, respond_to })
            .await
    }

    pub async fn replace(&self, id: T::Id, payload: T::Payload) -> Result<T, StoreError> {
        self.request(|respond_to| RecordRequest::Replace {
            id,
            payload,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| RecordRequest::Delete { id, respond_to })
            .await
    }

    pub async fn transition(&self, id: T::Id, status: T::Status) -> Result<T, StoreError> {
        self.request(|respond_to| RecordRequest::Transition {
            id,
            status,
            respond_to,
        })
        .await
    }
}
