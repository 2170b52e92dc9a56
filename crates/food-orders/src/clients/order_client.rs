//! # Order Client
//!
//! High-level API for the orders service. Wraps a `RecordClient<Order>`; the
//! shared operations (`get`, `replace`, `delete`, …) come from [`RecordService`].
use crate::model::{Order, OrderCreate, OrderId, OrderQuery, OrderStatus};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use record_framework::{RecordClient, RecordService, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: RecordClient<Order>,
}

impl OrderClient {
    pub fn new(inner: RecordClient<Order>) -> Self {
        Self { inner }
    }

    /// Places a new order. It is stored with a fresh id, a `created` stamp and
    /// status `created`.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending create_order to store");
        self.create(params).await
    }

    /// Lists orders, filtered by cancellation, creation time and limit.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, query: OrderQuery) -> Result<Vec<Order>, OrderError> {
        self.list(query.into()).await
    }

    /// Marks the order cancelled, whatever its current status.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId) -> Result<Order, OrderError> {
        self.transition(id, OrderStatus::Cancelled).await
    }

    /// Records payment; the order moves to `progress`.
    #[instrument(skip(self))]
    pub async fn pay(&self, id: OrderId) -> Result<Order, OrderError> {
        self.transition(id, OrderStatus::Progress).await
    }
}

#[async_trait]
impl RecordService<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &RecordClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderItem, Size};
    use chrono::Utc;
    use record_framework::mock::{create_mock_client, expect_list, expect_transition, MockClient};
    use uuid::Uuid;

    fn order(id: OrderId, status: OrderStatus) -> Order {
        Order {
            id,
            created: Utc::now(),
            status,
            items: vec![OrderItem::new("Pizza", Size::Medium, 2)],
        }
    }

    #[tokio::test]
    async fn test_pay_requests_progress_transition() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);
        let id = OrderId(Uuid::new_v4());

        let pay_task = tokio::spawn(async move { order_client.pay(id).await });

        let (got_id, status, responder) = expect_transition(&mut receiver)
            .await
            .expect("Expected Transition request");
        assert_eq!(got_id, id);
        assert_eq!(status, OrderStatus::Progress);
        responder.send(Ok(order(id, OrderStatus::Progress))).unwrap();

        let paid = pay_task.await.unwrap().unwrap();
        assert_eq!(paid.status, OrderStatus::Progress);
    }

    #[tokio::test]
    async fn test_list_orders_maps_cancelled_flag() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let list_task = tokio::spawn(async move {
            order_client
                .list_orders(OrderQuery {
                    cancelled: Some(false),
                    since: None,
                    limit: Some(3),
                })
                .await
        });

        let (query, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert_eq!(query.status_class, Some(false));
        assert_eq!(query.limit, Some(3));
        responder.send(Ok(Vec::new())).unwrap();

        assert!(list_task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_errors_map_to_order_errors() {
        let id = OrderId(Uuid::new_v4());
        let mut mock = MockClient::<Order>::new();
        mock.expect_transition(id, OrderStatus::Cancelled)
            .return_err(StoreError::NotFound(id.to_string()));
        mock.expect_get(id).return_err(StoreError::ActorDropped);

        let order_client = OrderClient::new(mock.client());

        let err = order_client.cancel(id).await.unwrap_err();
        assert_eq!(err, OrderError::NotFound(id.to_string()));
        assert_eq!(err.status_code(), 404);

        let err = order_client.get(id).await.unwrap_err();
        assert!(matches!(err, OrderError::ActorCommunicationError(_)));
        assert_eq!(err.status_code(), 503);

        mock.verify();
    }

    #[tokio::test]
    async fn test_list_orders_returns_store_snapshot() {
        let id = OrderId(Uuid::new_v4());
        let mut mock = MockClient::<Order>::new();
        mock.expect_list()
            .return_ok(vec![order(id, OrderStatus::Cancelled)]);

        let order_client = OrderClient::new(mock.client());
        let orders = order_client
            .list_orders(OrderQuery {
                cancelled: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, id);

        mock.verify();
    }
}
