//! Score keeper application layer for the sanma ledger.
//!
//! Wraps the pure [`sanma_ledger`] core with the pieces a running score
//! keeper needs:
//!
//! - **Store**: a persistence port with JSON-file and in-memory adapters;
//!   loading always degrades to a fresh game rather than failing.
//! - **Confirmation**: an injected async gate guarding the destructive
//!   reset.
//! - **Session**: the single writer that applies settlements, autosaves
//!   fire-and-forget, and sequences confirm-then-mutate.
//!
//! The `sanma_score` binary is a thin line-oriented terminal front end over
//! a session.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod confirm;
mod session;
mod store;

// Crate-level exports - confirmation port
pub use confirm::{AutoApprove, AutoDeny, ConfirmationGate, StdinConfirm};

// Crate-level exports - session
pub use session::ScoreSession;

// Crate-level exports - persistence port
pub use store::{JsonFileStore, MemoryStore, ScoreStore, StoreError};
