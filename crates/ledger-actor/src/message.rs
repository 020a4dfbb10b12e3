//! # Generic Messages
//!
//! This module defines the generic message types used for communication
//! between the `LedgerClient` and `LedgerActor`.

use crate::entity::LedgerEntry;
use crate::error::LedgerError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by ledger actors.
pub type Response<T> = oneshot::Sender<Result<T, LedgerError>>;

/// Internal message type sent to a ledger actor to request operations.
///
/// Each actor manages one kind of entry (the [`LedgerEntry`]). Instead of
/// ad-hoc messages per operation, the ledger standardizes around the
/// operations an append/update collection actually supports:
///
/// - **Create**: append a new entry (duplicate ids are rejected).
/// - **Get**: fetch the current state of an entry by id.
/// - **Update**: apply a partial mutation via [`LedgerEntry::on_update`].
/// - **Query**: scan the whole ledger with a [`LedgerEntry::Filter`].
///
/// There is no Delete: ledger entries live for the lifetime of the process.
///
/// The enum is generic over `T: LedgerEntry` and uses its associated types
/// (`Create`, `Update`, `Filter`) for every payload, so a create meant for
/// one ledger can never be sent to another.
#[derive(Debug)]
pub enum LedgerRequest<T: LedgerEntry> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Query {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
}
