//! # Store Messages
//!
//! Message types passed between [`RecordClient`](crate::RecordClient) and
//! [`RecordActor`](crate::RecordActor).

use crate::entity::RecordEntity;
use crate::error::StoreError;
use crate::query::RecordQuery;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a store task.
///
/// The variants map onto the store's operation set: the usual CRUD quartet
/// (`Create`, `Get`, `Replace`, `Delete`), a filtered `List`, and a
/// `Transition` that moves a record to a new status.
///
/// Generic over `T: RecordEntity`, so payload and status types are checked
/// against the record kind the store holds.
#[derive(Debug)]
pub enum RecordRequest<T: RecordEntity> {
    List {
        query: RecordQuery,
        respond_to: Response<Vec<T>>,
    },
    Create {
        payload: T::Payload,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    Replace {
        id: T::Id,
        payload: T::Payload,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Transition {
        id: T::Id,
        status: T::Status,
        respond_to: Response<T>,
    },
}
