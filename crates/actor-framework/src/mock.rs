//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of expectations instead of an actor. It enables fast, deterministic tests of
//! logic that sits *around* a client (services, other actors' hooks) without spawning the
//! actor being depended on.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! 1. **Pure mock**: drive a client wrapper against `MockClient` expectations.
//! 2. **Single actor**: spawn one `ResourceActor` and talk to it directly.
//! 3. **Actor with mocked dependencies**: spawn the actor under test and inject clients
//!    obtained from `MockClient` as its context (see `tests/bestellung_actor_test.rs` in the
//!    webshop crate).
//! 4. **Full system**: start every actor (see `tests/integration_test.rs`).
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Adresse { id: u32, ort: String }
//! #[derive(Debug)] struct AdresseCreate;
//! #[derive(Debug)] struct AdresseUpdate;
//! #[derive(Debug)] enum AdresseAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct AdresseError;
//!
//! #[async_trait]
//! impl ActorEntity for Adresse {
//!     type Id = u32; type Create = AdresseCreate; type Update = AdresseUpdate;
//!     type Action = AdresseAction; type ActionResult = (); type Query = ();
//!     type Context = (); type Error = AdresseError;
//!     fn from_create_params(id: u32, _: AdresseCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, ort: String::new() })
//!     }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn on_update(&mut self, _: AdresseUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: AdresseAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Adresse>::new();
//!     mock.expect_find().return_ok(vec![Adresse { id: 1, ort: "Karlsruhe".into() }]);
//!     mock.expect_delete(1).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.find(()).await.unwrap().len(), 1);
//!     assert!(matches!(client.delete(1).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Low-level helpers
//!
//! Use [`create_mock_client`] plus the `expect_*` functions when a test needs to inspect the
//! exact payload a client sent before deciding on the response.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Find {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
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

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in FIFO order. A request that does not match the next
/// expectation (wrong kind or wrong id) panics the background task, which surfaces in the
/// test as a dropped response channel and a failing [`MockClient::verify`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Find { respond_to, .. },
                        Some(Expectation::Find { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "update called with unexpected id");
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
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> Expect<'_, T, Option<T>> {
        Expect::new(self, move |response| Expectation::Get { id, response })
    }

    /// Expects a `find` operation.
    pub fn expect_find(&mut self) -> Expect<'_, T, Vec<T>> {
        Expect::new(self, |response| Expectation::Find { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> Expect<'_, T, T::Id> {
        Expect::new(self, |response| Expectation::Create { response })
    }

    /// Expects an `update` operation (versioned or not).
    pub fn expect_update(&mut self, id: T::Id) -> Expect<'_, T, T> {
        Expect::new(self, move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> Expect<'_, T, ()> {
        Expect::new(self, move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> Expect<'_, T, T::ActionResult> {
        Expect::new(self, move |response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct Expect<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a>,
}

impl<'a, T: ActorEntity, R> Expect<'a, T, R> {
    fn new(
        mock: &'a MockClient<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a,
    ) -> Self {
        Self {
            mock,
            build: Box::new(build),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.build)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.build)(Err(error)));
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests from `receiver`, asserts on their payload,
/// and answers through the request's `respond_to` channel.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request.
/// Returns the expected version alongside the payload.
#[allow(clippy::type_complexity)]
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Update,
    Option<u32>,
    oneshot::Sender<Result<T, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            expected_version,
            respond_to,
        }) => Some((id, update, expected_version, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Kunde {
        id: u32,
        email: String,
        version: u32,
    }

    #[derive(Debug)]
    struct KundeCreate {
        email: String,
    }

    #[derive(Debug)]
    struct KundeUpdate {
        email: String,
    }

    #[derive(Debug)]
    enum KundeAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Kunde error")]
    struct KundeError;

    #[async_trait]
    impl ActorEntity for Kunde {
        type Id = u32;
        type Create = KundeCreate;
        type Update = KundeUpdate;
        type Action = KundeAction;
        type ActionResult = ();
        type Query = ();
        type Context = ();
        type Error = KundeError;

        fn from_create_params(id: u32, params: KundeCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                email: params.email,
                version: 0,
            })
        }

        fn matches(&self, _query: &()) -> bool {
            true
        }

        async fn on_update(&mut self, update: KundeUpdate, _ctx: &()) -> Result<(), Self::Error> {
            self.email = update.email;
            Ok(())
        }

        async fn handle_action(
            &mut self,
            _action: KundeAction,
            _ctx: &(),
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn kunde(id: u32, email: &str) -> Kunde {
        Kunde {
            id,
            email: email.to_string(),
            version: 0,
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Kunde>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(KundeCreate {
                    email: "test@example.com".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.email, "test@example.com");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_versioned_update_reaches_the_actor() {
        let (client, mut receiver) = create_mock_client::<Kunde>(10);

        let update_task = tokio::spawn(async move {
            client
                .update_versioned(
                    7,
                    KundeUpdate {
                        email: "neu@example.com".to_string(),
                    },
                    3,
                )
                .await
        });

        let (id, update, version, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, 7);
        assert_eq!(update.email, "neu@example.com");
        assert_eq!(version, Some(3));
        responder.send(Ok(kunde(7, "neu@example.com"))).unwrap();

        assert_eq!(update_task.await.unwrap().unwrap().email, "neu@example.com");
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Kunde>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(kunde(1, "test@example.com")));
        mock.expect_find()
            .return_ok(vec![kunde(1, "test@example.com"), kunde(2, "b@example.com")]);
        mock.expect_update(1).return_err(FrameworkError::VersionConflict {
            id: "1".into(),
            expected: 0,
            actual: 1,
        });
        mock.expect_delete(1).return_ok(());

        let client = mock.client();

        let id = client
            .create(KundeCreate {
                email: "test@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().email, "test@example.com");

        assert_eq!(client.find(()).await.unwrap().len(), 2);

        let stale = client
            .update_versioned(
                1,
                KundeUpdate {
                    email: "x@example.com".into(),
                },
                0,
            )
            .await;
        assert!(matches!(stale, Err(FrameworkError::VersionConflict { actual: 1, .. })));

        client.delete(1).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unused_expectations() {
        let mut mock = MockClient::<Kunde>::new();
        mock.expect_get(1).return_ok(None);
        mock.verify();
    }
}
