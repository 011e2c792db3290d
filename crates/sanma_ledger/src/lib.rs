//! Pure scoring ledger for a three-player mahjong variant.
//!
//! Tracks running point balances for three fixed players and settles each
//! hand's declared outcome — discard win (出銃), self-draw win (自摸), or
//! no-win draw (和) — under a small fixed rule set:
//!
//! - A declared fan count in 6–11 maps to a point value via [`Fan`];
//! - every settlement is zero-sum across the three players and the shared
//!   jackpot;
//! - no-win draws feed the jackpot, which pays out in full on an 11-fan win.
//!
//! [`GameState`] composes the [`ScoreLedger`] with an append-only
//! [`EventLog`]; the `invariants` module states the guarantees as checkable
//! properties. [`Selection`] models the step-wise declaration flow owned by
//! the presentation layer. This crate performs no I/O; persistence and
//! confirmation live with the application.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod events;
mod fan;
mod ledger;
mod player;
mod selection;
mod state;

/// First-class invariants over [`GameState`].
pub mod invariants;

// Crate-level exports - settlement records
pub use events::{BalanceChange, EventLog, SettlementEvent, SettlementKind};

// Crate-level exports - fan table
pub use fan::{Fan, FanError};

// Crate-level exports - ledger
pub use ledger::{DRAW_JACKPOT_GAIN, DRAW_PENALTY, LedgerError, ScoreLedger};

// Crate-level exports - players
pub use player::{PlayerAccount, PlayerId, PlayerIdError};

// Crate-level exports - declaration flow
pub use selection::{Selection, SelectionError, SettlementRequest};

// Crate-level exports - game state
pub use state::GameState;
