//! # Schedule Client
//!
//! High-level API for the kitchen service. Wraps a `RecordClient<Schedule>` and
//! adds the kitchen's own operations.
use crate::model::{Schedule, ScheduleCreate, ScheduleId, ScheduleQuery, ScheduleStatus, ScheduleStatusView};
use crate::schedule_actor::ScheduleError;
use async_trait::async_trait;
use record_framework::{RecordClient, RecordService, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Schedule store.
#[derive(Clone)]
pub struct ScheduleClient {
    inner: RecordClient<Schedule>,
}

#[async_trait]
impl RecordService<Schedule> for ScheduleClient {
    type Error = ScheduleError;

    fn inner(&self) -> &RecordClient<Schedule> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ScheduleError::from(e)
    }
}

impl ScheduleClient {
    pub fn new(inner: RecordClient<Schedule>) -> Self {
        Self { inner }
    }

    /// Schedules order lines for preparation. The entry starts `pending`.
    #[instrument(skip(self))]
    pub async fn schedule(&self, params: ScheduleCreate) -> Result<Schedule, ScheduleError> {
        debug!("Sending request");
        self.create(params).await
    }

    #[instrument(skip(self))]
    pub async fn list_schedules(
        &self,
        query: ScheduleQuery,
    ) -> Result<Vec<Schedule>, ScheduleError> {
        self.list(query.into()).await
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: ScheduleId) -> Result<Schedule, ScheduleError> {
        self.transition(id, ScheduleStatus::Cancelled).await
    }

    /// Starts preparation; the schedule moves to `progress`.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: ScheduleId) -> Result<Schedule, ScheduleError> {
        self.transition(id, ScheduleStatus::Progress).await
    }

    /// Status of a schedule, without its lines.
    #[instrument(skip(self))]
    pub async fn status(&self, id: ScheduleId) -> Result<ScheduleStatusView, ScheduleError> {
        let schedule = self.get(id).await?;
        Ok(ScheduleStatusView {
            status: schedule.status,
        })
    }
}
