//! # Mock Ledger & Testing Guide
//!
//! [`MockLedger<T>`] hands out the same [`LedgerClient<T>`] API as a real
//! actor but answers every request from a queue of expectations, entirely
//! in-memory. It makes unit tests of client logic fast and deterministic:
//! no spawned ledgers, no scheduler, and error injection is a one-liner.
//!
//! ## When to use a mock vs. a real ledger
//!
//! | Feature | MockLedger | Real LedgerActor |
//! |---------|------------|------------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% deterministic | Subject to scheduler |
//! | **State** | None (expectations only) | Real store |
//! | **Use case** | Logic *around* the client | The ledger itself, full flows |
//! | **Error injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing strategies
//!
//! Three patterns cover the system:
//!
//! 1. **Client logic test (pure mock)** — wrap a `MockLedger`'s client in a
//!    domain client and test the domain client's mapping logic (e.g. "a
//!    `get` returning `None` becomes NotFound").
//! 2. **Single ledger test** — spawn one real `LedgerActor` with its real
//!    context and drive it through its client. This is where entry hooks
//!    (validation, derived values, partial updates) get exercised.
//! 3. **Full system test** — boot the whole system and test end-to-end
//!    flows, including concurrency.
//!
//! ## Error injection
//!
//! ```rust
//! use ledger_actor::mock::MockLedger;
//! use ledger_actor::{LedgerEntry, LedgerError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Tab { id: u32 }
//! #[derive(Debug)] struct TabCreate;
//! #[derive(Debug)] struct TabPatch;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct TabError;
//!
//! #[async_trait]
//! impl LedgerEntry for Tab {
//!     type Id = u32; type Create = TabCreate; type Update = TabPatch;
//!     type Filter = (); type Context = (); type Error = TabError;
//!     fn assign_id(next: u32, _: &TabCreate) -> u32 { next }
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create(id: u32, _: TabCreate) -> Result<Self, TabError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: TabPatch, _: &()) -> Result<(), TabError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockLedger::<Tab>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_get(1).return_err(LedgerError::ActorClosed);
//!
//!     // Verify the caller handles it gracefully
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(LedgerError::ActorClosed)));
//! }
//! ```
//!
//! ## Utilities
//!
//! Use [`create_mock_client`] when a test wants to inspect the raw requests
//! on a channel instead of queueing expectations.

use crate::client::LedgerClient;
use crate::entity::LedgerEntry;
use crate::error::LedgerError;
use crate::message::LedgerRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock ledger.
///
/// Used internally by `MockLedger` to track which requests are expected and
/// what each should answer.
enum Expectation<T: LedgerEntry> {
    Get {
        #[allow(dead_code)]
        id: T::Id,
        response: Result<Option<T>, LedgerError>,
    },
    Create {
        response: Result<T, LedgerError>,
    },
    Update {
        #[allow(dead_code)]
        id: T::Id,
        response: Result<T, LedgerError>,
    },
    Query {
        response: Result<Vec<T>, LedgerError>,
    },
}

/// A mock ledger with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockLedger::<LoyaltyAccount>::new();
/// mock.expect_get(number.clone()).return_ok(Some(account));
/// mock.expect_create().return_ok(created);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were consumed
/// ```
pub struct MockLedger<T: LedgerEntry> {
    client: LedgerClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: LedgerEntry + Send + 'static> Default for MockLedger<T>
where
    T::Id: Send,
    T::Create: Send,
    T::Update: Send,
    T::Filter: Send,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: LedgerEntry + Send + 'static> MockLedger<T>
where
    T::Id: Send,
    T::Create: Send,
    T::Update: Send,
    T::Filter: Send,
{
    /// Creates a new mock ledger with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<LedgerRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to answer requests from the queue
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before responding

                match (request, expectation) {
                    (
                        LedgerRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::Create {
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::Update {
                            id: _,
                            update: _,
                            respond_to,
                        },
                        Some(Expectation::Update { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::Query {
                            filter: _,
                            respond_to,
                        },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: LedgerClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> LedgerClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query` operation.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<T> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: LedgerEntry> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: LedgerEntry> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: LedgerError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: LedgerEntry> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: LedgerEntry> CreateExpectationBuilder<T> {
    /// Sets the expectation to return the stored entry.
    pub fn return_ok(self, entry: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Ok(entry),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: LedgerError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: LedgerEntry> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: LedgerEntry> UpdateExpectationBuilder<T> {
    /// Sets the expectation to return the updated entry.
    pub fn return_ok(self, entry: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Update {
            id: self.id,
            response: Ok(entry),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: LedgerError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Update {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<T: LedgerEntry> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: LedgerEntry> QueryExpectationBuilder<T> {
    /// Sets the expectation to return the matching entries.
    pub fn return_ok(self, entries: Vec<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Query {
            response: Ok(entries),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: LedgerError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Query {
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting raw requests.
///
/// # Testing Strategy
/// Instead of queueing canned answers, some tests want to look at the actual
/// message a client sent (payload, id, filter) before deciding how to
/// respond. This helper hands back the receiver side of the channel so the
/// test plays the ledger itself.
///
/// **Note**: for most tests the fluent [`MockLedger`] API is less verbose.
pub fn create_mock_client<T: LedgerEntry>(
    buffer_size: usize,
) -> (LedgerClient<T>, mpsc::Receiver<LedgerRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: LedgerEntry>(
    receiver: &mut mpsc::Receiver<LedgerRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T, LedgerError>>,
)> {
    match receiver.recv().await {
        Some(LedgerRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: LedgerEntry>(
    receiver: &mut mpsc::Receiver<LedgerRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, LedgerError>>,
)> {
    match receiver.recv().await {
        Some(LedgerRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query<T: LedgerEntry>(
    receiver: &mut mpsc::Receiver<LedgerRequest<T>>,
) -> Option<(
    T::Filter,
    tokio::sync::oneshot::Sender<Result<Vec<T>, LedgerError>>,
)> {
    match receiver.recv().await {
        Some(LedgerRequest::Query { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}
