//! # Observability & Tracing
//!
//! Tracing bootstrap for ledger-based systems.
//!
//! [`setup_tracing`] initializes structured logging with the `tracing`
//! crate. Every ledger operation (Create, Get, Update, Query) is logged with
//! an `entry_type` field plus the entry id and store size, and domain
//! clients add `#[instrument]` spans around their calls, so a request can be
//! followed from the HTTP handler down to the ledger mutation.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The compact
//! format hides module paths (`with_target(false)`) since the structured
//! `entry_type` field already says which ledger a line belongs to.
//!
//! ```bash
//! RUST_LOG=info cargo run      # operation outcomes
//! RUST_LOG=debug cargo run     # full request payloads
//! ```
//!
//! With `RUST_LOG=debug`, clients log the incoming payload once at the start
//! (`debug!(?params, "...")` records the `Debug` representation as a
//! structured field) and subsequent lines stay concise:
//!
//! ```text
//! DEBUG Create params=OrderCreate { items: ["1", "2"], .. }
//! INFO Created entry_type="Order" id=3 size=3
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entry_type already identifies the ledger
        .compact()
        .init();
}
