//! # Generic Ledger Actor
//!
//! This module defines the `LedgerActor`, the component that owns an
//! in-memory collection of entries and processes every request against it
//! sequentially. It is the "server" side of the actor pair.

use crate::client::LedgerClient;
use crate::entity::LedgerEntry;
use crate::error::LedgerError;
use crate::message::LedgerRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages one ledger of entries.
///
/// # Architecture Note
/// This struct owns the state (`store`) and the receiver end of the channel.
///
/// **Concurrency model**: each `LedgerActor` runs in its own Tokio task and
/// processes its messages one at a time. That sequential loop *is* the
/// mutual-exclusion mechanism for the ledger — no `Mutex` or `RwLock` is
/// needed for the store, and a failed request can never interleave with a
/// mutation. Different ledgers still run in parallel with each other.
///
/// # Operations
///
/// * **Create**: derive the id via [`LedgerEntry::assign_id`] (counter or
///   natural key), reject it if already present, construct the entry, await
///   the `on_create` hook, store, and return the stored entry. A hook
///   failure stores nothing.
/// * **Get**: clone the entry out of the store, or `None`.
/// * **Update**: locate the entry (NotFound otherwise), await the
///   `on_update` hook with the patch, and return the post-hook state.
/// * **Query**: scan the store with [`LedgerEntry::matches`] and return
///   every matching entry.
pub struct LedgerActor<T: LedgerEntry> {
    receiver: mpsc::Receiver<LedgerRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: LedgerEntry> LedgerActor<T> {
    /// Creates an empty `LedgerActor` and its associated `LedgerClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the mpsc channel. When full, client
    ///   calls wait until there is space.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `LedgerActor` (the server), which must be run via `.run()`.
    /// 2. The `LedgerClient`, which can be cloned and shared freely.
    pub fn new(buffer_size: usize) -> (Self, LedgerClient<T>) {
        Self::with_entries(buffer_size, 1, Vec::new())
    }

    /// Creates a `LedgerActor` pre-populated with `entries`, as when a
    /// process boots from seed data.
    ///
    /// `next_id` is the first value handed to [`LedgerEntry::assign_id`] for
    /// generated-id ledgers; callers seeding numeric ids pass a value above
    /// the highest seeded id so fresh entries never collide.
    pub fn with_entries(
        buffer_size: usize,
        next_id: u32,
        entries: Vec<T>,
    ) -> (Self, LedgerClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = entries
            .into_iter()
            .map(|entry| (entry.id().clone(), entry))
            .collect();
        let actor = Self {
            receiver,
            store,
            next_id,
        };
        let client = LedgerClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entry hook. This lets
    /// entries reach dependencies (shared reference data, other clients)
    /// that were created *after* the actor was instantiated but *before*
    /// the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g. "Order" instead of
        // "brewline::model::order::Order")
        let entry_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entry_type, size = self.store.len(), "Ledger started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::Create { params, respond_to } => {
                    debug!(entry_type, ?params, "Create");
                    let id = T::assign_id(self.next_id, &params);
                    if self.store.contains_key(&id) {
                        warn!(entry_type, %id, "Already exists");
                        let _ = respond_to.send(Err(LedgerError::AlreadyExists(id.to_string())));
                        continue;
                    }
                    self.next_id += 1;

                    match T::from_create(id.clone(), params) {
                        Ok(mut entry) => {
                            // Await the async hook
                            if let Err(e) = entry.on_create(&context).await {
                                warn!(entry_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(LedgerError::EntryError(Box::new(e))));
                                continue;
                            }
                            let stored = entry.clone();
                            self.store.insert(id.clone(), entry);
                            info!(entry_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(stored));
                        }
                        Err(e) => {
                            warn!(entry_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(LedgerError::EntryError(Box::new(e))));
                        }
                    }
                }
                LedgerRequest::Get { id, respond_to } => {
                    let entry = self.store.get(&id).cloned();
                    let found = entry.is_some();
                    debug!(entry_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(entry));
                }
                LedgerRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entry_type, %id, ?update, "Update");
                    if let Some(entry) = self.store.get_mut(&id) {
                        // Await the async hook
                        if let Err(e) = entry.on_update(update, &context).await {
                            warn!(entry_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(LedgerError::EntryError(Box::new(e))));
                            continue;
                        }
                        info!(entry_type, %id, "Updated");
                        let _ = respond_to.send(Ok(entry.clone()));
                    } else {
                        warn!(entry_type, %id, "Not found");
                        let _ = respond_to.send(Err(LedgerError::NotFound(id.to_string())));
                    }
                }
                LedgerRequest::Query { filter, respond_to } => {
                    let matches: Vec<T> = self
                        .store
                        .values()
                        .filter(|entry| entry.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entry_type, ?filter, hits = matches.len(), "Query");
                    let _ = respond_to.send(Ok(matches));
                }
            }
        }

        info!(entry_type, size = self.store.len(), "Shutdown");
    }
}
