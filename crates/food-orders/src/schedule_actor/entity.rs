//! RecordEntity trait implementation for the Schedule domain type.
//!
//! Schedules start in [`ScheduleStatus::Pending`]. The list filter's status class
//! is [`ScheduleStatus::Progress`] and its time bound reads `scheduled`.

use crate::model::{validate_items, Schedule, ScheduleCreate, ScheduleId, ScheduleStatus};
use chrono::{DateTime, Utc};
use record_framework::{RecordEntity, ValidationErrors};

impl RecordEntity for Schedule {
    type Id = ScheduleId;
    type Payload = ScheduleCreate;
    type Status = ScheduleStatus;

    const STATUS_CLASS: ScheduleStatus = ScheduleStatus::Progress;

    fn from_payload(id: ScheduleId, payload: ScheduleCreate, stamped: DateTime<Utc>) -> Self {
        Self {
            id,
            scheduled: stamped,
            status: ScheduleStatus::Pending,
            items: payload.items,
        }
    }

    fn apply_payload(&mut self, payload: ScheduleCreate) {
        self.items = payload.items;
    }

    fn id(&self) -> &ScheduleId {
        &self.id
    }

    fn status(&self) -> ScheduleStatus {
        self.status
    }

    fn set_status(&mut self, status: ScheduleStatus) {
        self.status = status;
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.scheduled
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_items(&self.items, &mut errors);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderItem, Size};
    use uuid::Uuid;

    #[test]
    fn new_schedules_start_pending() {
        let payload = ScheduleCreate::new(vec![OrderItem::new("Pizza", Size::Big, 1)]);
        let schedule = Schedule::from_payload(ScheduleId(Uuid::new_v4()), payload, Utc::now());
        assert_eq!(schedule.status, ScheduleStatus::Pending);
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn zero_quantity_fails_validation() {
        let payload = ScheduleCreate::new(vec![OrderItem::new("Pizza", Size::Big, 0)]);
        let schedule = Schedule::from_payload(ScheduleId(Uuid::new_v4()), payload, Utc::now());
        let errors = schedule.validate().unwrap_err();
        assert!(errors.has_field("order[0].quantity"));
    }
}
