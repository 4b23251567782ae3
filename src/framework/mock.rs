//! # Mock Framework
//!
//! Test doubles for [`ResourceClient`]s, so a typed client (or an actor that depends on
//! one) can be exercised without spawning the real actor behind it.
//!
//! Two styles are available:
//! - [`MockClient`]: queue expectations up front, then call [`MockClient::verify`].
//! - [`create_mock_client`] with [`expect_create`] / [`expect_get`] / [`expect_action`]:
//!   receive raw requests and answer them by hand.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A client whose actor answers from a queue of expectations, in order.
///
/// ```ignore
/// let mut mock = MockClient::<CateringSession>::new();
/// mock.expect_action(SessionId(1)).return_ok(SessionActionResult::Quote(Box::new(quote)));
/// let client = SessionClient::new(mock.client());
/// // ...
/// mock.verify();
/// ```
///
/// A request that does not match the next expectation panics the mock task, which the
/// caller observes as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(64);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().expect("mock queue poisoned").pop_front();
                match (request, next) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => panic!("Unexpected {} request", request.kind()),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> CreateExpectation<T> {
        CreateExpectation {
            queue: self.expectations.clone(),
        }
    }

    pub fn expect_get(&mut self, id: T::Id) -> Expect<T, Option<T>> {
        Expect::new(id, self.expectations.clone(), |id, response| Expectation::Get { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> Expect<T, ()> {
        Expect::new(id, self.expectations.clone(), |id, response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> Expect<T, T::ActionResult> {
        Expect::new(id, self.expectations.clone(), |id, response| Expectation::Action { id, response })
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock queue poisoned").len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectation<T: ActorEntity> {
    queue: Queue<T>,
}

impl<T: ActorEntity> CreateExpectation<T> {
    pub fn return_ok(self, id: T::Id) {
        self.push(Ok(id));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Id, FrameworkError>) {
        self.queue
            .lock()
            .expect("mock queue poisoned")
            .push_back(Expectation::Create { response });
    }
}

/// Builder for id-addressed expectations (`get`, `delete`, `action`).
pub struct Expect<T: ActorEntity, R> {
    id: T::Id,
    queue: Queue<T>,
    build: fn(T::Id, Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> Expect<T, R> {
    fn new(
        id: T::Id,
        queue: Queue<T>,
        build: fn(T::Id, Result<R, FrameworkError>) -> Expectation<T>,
    ) -> Self {
        Self { id, queue, build }
    }

    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.build)(self.id, response);
        self.queue
            .lock()
            .expect("mock queue poisoned")
            .push_back(expectation);
    }
}

/// A client plus the receiving end of its channel, for answering requests by hand.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
