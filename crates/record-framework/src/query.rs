//! # Query Engine
//!
//! Filtered, size-limited views over a snapshot of a collection.
//!
//! Filters compose as a logical AND and are applied in a fixed order:
//!
//! 1. **Status class** – `Some(true)` keeps records whose status equals
//!    [`RecordEntity::STATUS_CLASS`], `Some(false)` keeps the complement.
//! 2. **Since** – keeps records whose [`RecordEntity::timestamp`] is at or after the bound.
//! 3. **Limit** – keeps the first `n` survivors in insertion order. A limit of zero
//!    or below yields an empty result.
//!
//! The input slice is never modified; the result is an owned copy.

use crate::entity::RecordEntity;
use chrono::{DateTime, Utc};

/// Filter and pagination parameters for a `list` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub status_class: Option<bool>,
    pub since: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
}

impl RecordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_class(mut self, flag: bool) -> Self {
        self.status_class = Some(flag);
        self
    }

    pub fn since(mut self, bound: DateTime<Utc>) -> Self {
        self.since = Some(bound);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// True when no filter and no limit is set.
    pub fn is_unfiltered(&self) -> bool {
        self.status_class.is_none() && self.since.is_none() && self.limit.is_none()
    }

    fn max_len(&self) -> usize {
        match self.limit {
            None => usize::MAX,
            Some(n) if n <= 0 => 0,
            Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
        }
    }
}

/// Applies `query` to `records`, returning the matching records in their original order.
pub fn apply_query<T: RecordEntity>(records: &[T], query: &RecordQuery) -> Vec<T> {
    if query.is_unfiltered() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| match query.status_class {
            Some(flag) => (record.status() == T::STATUS_CLASS) == flag,
            None => true,
        })
        .filter(|record| match query.since {
            Some(bound) => record.timestamp() >= bound,
            None => true,
        })
        .take(query.max_len())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrors;
    use chrono::TimeZone;
    use uuid::Uuid;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Red,
        Green,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Lamp {
        id: Uuid,
        at: DateTime<Utc>,
        light: Light,
        label: String,
    }

    impl RecordEntity for Lamp {
        type Id = Uuid;
        type Payload = String;
        type Status = Light;

        const STATUS_CLASS: Light = Light::Red;

        fn from_payload(id: Uuid, label: String, stamped: DateTime<Utc>) -> Self {
            Self { id, at: stamped, light: Light::Green, label }
        }

        fn apply_payload(&mut self, label: String) {
            self.label = label;
        }

        fn id(&self) -> &Uuid {
            &self.id
        }

        fn status(&self) -> Light {
            self.light
        }

        fn set_status(&mut self, status: Light) {
            self.light = status;
        }

        fn timestamp(&self) -> DateTime<Utc> {
            self.at
        }

        fn validate(&self) -> Result<(), ValidationErrors> {
            Ok(())
        }
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap()
    }

    fn lamps() -> Vec<Lamp> {
        [(0, Light::Red), (1, Light::Green), (2, Light::Red), (3, Light::Green)]
            .into_iter()
            .map(|(minute, light)| Lamp {
                id: Uuid::new_v4(),
                at: at(minute),
                light,
                label: format!("lamp-{minute}"),
            })
            .collect()
    }

    fn labels(records: &[Lamp]) -> Vec<&str> {
        records.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn unfiltered_query_returns_everything() {
        let records = lamps();
        assert_eq!(apply_query(&records, &RecordQuery::new()), records);
    }

    #[test]
    fn status_class_true_and_false_partition_the_collection() {
        let records = lamps();

        let red = apply_query(&records, &RecordQuery::new().status_class(true));
        let other = apply_query(&records, &RecordQuery::new().status_class(false));

        assert_eq!(labels(&red), ["lamp-0", "lamp-2"]);
        assert_eq!(labels(&other), ["lamp-1", "lamp-3"]);
    }

    #[test]
    fn since_is_inclusive_and_keeps_order() {
        let records = lamps();
        let result = apply_query(&records, &RecordQuery::new().since(at(1)));
        assert_eq!(labels(&result), ["lamp-1", "lamp-2", "lamp-3"]);
    }

    #[test]
    fn limit_truncates_after_filtering() {
        let records = lamps();

        let result = apply_query(&records, &RecordQuery::new().status_class(false).limit(1));
        assert_eq!(labels(&result), ["lamp-1"]);

        let result = apply_query(&records, &RecordQuery::new().limit(10));
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn non_positive_limit_is_empty() {
        let records = lamps();
        assert!(apply_query(&records, &RecordQuery::new().limit(0)).is_empty());
        assert!(apply_query(&records, &RecordQuery::new().limit(-3)).is_empty());
    }

    #[test]
    fn filters_combine_as_and() {
        let records = lamps();
        let result = apply_query(&records, &RecordQuery::new().status_class(true).since(at(1)));
        assert_eq!(labels(&result), ["lamp-2"]);
    }

    #[test]
    fn empty_collection_is_not_an_error() {
        let records: Vec<Lamp> = Vec::new();
        assert!(apply_query(&records, &RecordQuery::new().status_class(true)).is_empty());
    }
}
