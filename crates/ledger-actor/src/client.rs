//! # Generic Client
//!
//! This module defines the generic client for communicating with ledger
//! actors.

use crate::entity::LedgerEntry;
use crate::error::LedgerError;
use crate::message::LedgerRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `LedgerActor`.
///
/// The client forwards requests over a Tokio mpsc channel and receives each
/// result on a dedicated oneshot channel. It holds only a sender, so cloning
/// is cheap and clones can be handed to any task that needs the ledger.
#[derive(Clone)]
pub struct LedgerClient<T: LedgerEntry> {
    sender: mpsc::Sender<LedgerRequest<T>>,
}

impl<T: LedgerEntry> LedgerClient<T> {
    pub fn new(sender: mpsc::Sender<LedgerRequest<T>>) -> Self {
        Self { sender }
    }

    /// Append a new entry; returns the stored entry as the ledger recorded
    /// it (derived fields included).
    pub async fn create(&self, params: T::Create) -> Result<T, LedgerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Create { params, respond_to })
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, LedgerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Get { id, respond_to })
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, LedgerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }

    /// Scan the ledger and return every entry matching `filter`.
    pub async fn query(&self, filter: T::Filter) -> Result<Vec<T>, LedgerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Query { filter, respond_to })
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }
}
