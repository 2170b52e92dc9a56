//! # Mock Store & Testing Guide
//!
//! Helpers for testing domain clients without spawning a [`RecordActor`](crate::RecordActor).
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | Mock | Real Store |
//! |---------|------|------------|
//! | **State** | None, answers are scripted | Real collection |
//! | **Use Case** | Checking which request a client method sends | Store semantics, end to end |
//! | **Error Injection** | Easy (`return_err`) | Needs a specific store state |
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue expectations up front, run the code under test, then
//!   call [`MockClient::verify`].
//! - [`create_mock_client`] + `expect_*` helpers: drive the channel by hand and
//!   answer each request from the test body.

use crate::{RecordClient, RecordEntity, RecordQuery, RecordRequest, StoreError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the scripted answer.
enum Expectation<T: RecordEntity> {
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Get {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Transition {
        id: T::Id,
        status: T::Status,
        response: Result<T, StoreError>,
    },
}

impl<T: RecordEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::List { .. } => "list",
            Expectation::Get { .. } => "get",
            Expectation::Transition { .. } => "transition",
        }
    }
}

type Shared<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted store: requests are matched in order against queued expectations.
///
/// Mismatches are recorded rather than panicking inside the background task; the
/// offending request gets `StoreError::ActorDropped` and [`MockClient::verify`]
/// reports what went wrong.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Order>::new();
/// mock.expect_transition(id.clone(), OrderStatus::Progress).return_ok(paid_order);
///
/// let client = OrderClient::new(mock.client());
/// client.pay(id).await?;
/// mock.verify();
/// ```
pub struct MockClient<T: RecordEntity> {
    client: RecordClient<T>,
    expectations: Shared<T>,
    failures: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: RecordEntity> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RecordRequest<T>>(100);
        let expectations: Shared<T> = Arc::new(Mutex::new(VecDeque::new()));
        let failures = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let failed = failures.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().ok().and_then(|mut q| q.pop_front());
                if let Some(mismatch) = answer(request, expectation) {
                    if let Ok(mut failed) = failed.lock() {
                        failed.push(mismatch);
                    }
                }
            }
        });

        Self {
            client: RecordClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> RecordClient<T> {
        self.client.clone()
    }

    /// Expects a `list` call.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List {
            response,
        })
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get { id, response }
        })
    }

    /// Expects a `transition` of `id` to `status`.
    pub fn expect_transition(&mut self, id: T::Id, status: T::Status) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Transition {
                id,
                status,
                response,
            }
        })
    }

    /// Panics if an expectation is left over or a request did not match.
    pub fn verify(&self) {
        let failures = self.failures.lock().map(|f| f.clone()).unwrap_or_default();
        if !failures.is_empty() {
            panic!("Unexpected requests: {}", failures.join("; "));
        }
        let remaining = self.expectations.lock().map(|e| e.len()).unwrap_or_default();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: RecordEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Answers `request` from `expectation`; returns a description on mismatch.
fn answer<T: RecordEntity>(
    request: RecordRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Option<String> {
    match (request, expectation) {
        (RecordRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
            None
        }
        (RecordRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
            if id == want =>
        {
            let _ = respond_to.send(response);
            None
        }
        (
            RecordRequest::Transition {
                id,
                status,
                respond_to,
            },
            Some(Expectation::Transition {
                id: want_id,
                status: want_status,
                response,
            }),
        ) if id == want_id && status == want_status => {
            let _ = respond_to.send(response);
            None
        }
        (request, expectation) => Some(format!(
            "got {:?}, expected {}",
            request,
            expectation.as_ref().map_or("nothing", Expectation::name)
        )),
    }
}

/// Builder that completes a queued expectation with its answer.
pub struct ExpectationBuilder<T: RecordEntity, R> {
    expectations: Shared<T>,
    make: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: RecordEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Shared<T>,
        make: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.make)(response);
        if let Ok(mut queue) = self.expectations.lock() {
            queue.push_back(expectation);
        }
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

type Responder<R> = oneshot::Sender<Result<R, StoreError>>;

/// Creates a client and the receiver its requests land on.
///
/// The test plays the store: read each request with an `expect_*` helper and
/// answer through the returned responder.
pub fn create_mock_client<T: RecordEntity>(
    buffer_size: usize,
) -> (RecordClient<T>, mpsc::Receiver<RecordRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RecordClient::new(sender), receiver)
}

/// Next message, if it is a List request.
pub async fn expect_list<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(RecordQuery, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(RecordRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(T::Payload, Responder<T>)> {
    match receiver.recv().await {
        Some(RecordRequest::Create {
            payload,
            respond_to,
        }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(T::Id, Responder<T>)> {
    match receiver.recv().await {
        Some(RecordRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Transition request.
pub async fn expect_transition<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(T::Id, T::Status, Responder<T>)> {
    match receiver.recv().await {
        Some(RecordRequest::Transition {
            id,
            status,
            respond_to,
        }) => Some((id, status, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrors;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq)]
    struct Crate {
        id: Uuid,
        at: DateTime<Utc>,
        sealed: bool,
    }

    impl RecordEntity for Crate {
        type Id = Uuid;
        type Payload = ();
        type Status = bool;

        const STATUS_CLASS: bool = true;

        fn from_payload(id: Uuid, _: (), at: DateTime<Utc>) -> Self {
            Self { id, at, sealed: false }
        }
        fn apply_payload(&mut self, _: ()) {}
        fn id(&self) -> &Uuid {
            &self.id
        }
        fn status(&self) -> bool {
            self.sealed
        }
        fn set_status(&mut self, sealed: bool) {
            self.sealed = sealed;
        }
        fn timestamp(&self) -> DateTime<Utc> {
            self.at
        }
        fn validate(&self) -> Result<(), ValidationErrors> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn channel_helpers_hand_requests_to_the_test() {
        let (client, mut receiver) = create_mock_client::<Crate>(4);

        let task = tokio::spawn(async move { client.create(()).await });

        let (_payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        let stored = Crate::from_payload(Uuid::new_v4(), (), Utc::now());
        responder.send(Ok(stored.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(stored));
    }

    #[tokio::test]
    async fn mock_client_answers_in_order() {
        let id = Uuid::new_v4();
        let sealed = Crate { id, at: Utc::now(), sealed: true };

        let mut mock = MockClient::<Crate>::new();
        mock.expect_transition(id, true).return_ok(sealed.clone());
        mock.expect_get(id).return_err(StoreError::NotFound(id.to_string()));

        let client = mock.client();
        assert_eq!(client.transition(id, true).await, Ok(sealed));
        assert_eq!(client.get(id).await, Err(StoreError::NotFound(id.to_string())));

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected requests")]
    async fn mismatched_request_fails_verification() {
        let id = Uuid::new_v4();
        let mut mock = MockClient::<Crate>::new();
        mock.expect_transition(id, true).return_ok(Crate { id, at: Utc::now(), sealed: true });

        let result = mock.client().transition(id, false).await;
        assert_eq!(result, Err(StoreError::ActorDropped));

        mock.verify();
    }
}
