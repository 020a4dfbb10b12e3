//! # System Lifecycle & Orchestration
//!
//! Individual ledgers are simple; wiring them together is where the
//! coordination lives. This module provides the conductor for the whole
//! service.
//!
//! **Key responsibilities:**
//! 1. **Startup** - build the catalog and seed both ledgers
//! 2. **Dependency injection** - hand the catalog to the order ledger via
//!    context injection at `run()` time
//! 3. **Lifecycle** - one Tokio task per ledger
//! 4. **Graceful shutdown** - drop clients, await the actor tasks
//!
//! ## Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `recv()` returns `None`
//! 3. **Actors drain** - remaining messages are processed, final state logged
//! 4. **Await completion** - every task joined before `shutdown` returns
//!
//! The catalog held in the order actor's context is only an `Arc` of
//! reference data, so it never keeps a channel open and cannot stall the
//! shutdown.
//!
//! ## Observability
//!
//! Tracing is initialized once, in `main`, via
//! [`ledger_actor::tracing::setup_tracing`]; see that module for the
//! `RUST_LOG` conventions.

pub mod cafe_system;

pub use cafe_system::*;
