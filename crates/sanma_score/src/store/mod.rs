//! Persistence port for game snapshots.
//!
//! A store keeps at most one snapshot: the serialized [`GameState`] (three
//! names, three balances, jackpot, settlement history) as a single JSON
//! document. Loading never fails outward — missing, unreadable, corrupt, or
//! invariant-violating snapshots all degrade to the fresh-game default with
//! a logged warning, so the caller always gets a usable state.

// Private module declarations
mod error;
mod json_file;
mod memory;

// Crate-level exports via pub use
pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use sanma_ledger::GameState;
use tracing::{info, warn};

/// Persistence port: load, save, and clear one game snapshot.
pub trait ScoreStore {
    /// Loads the saved game, or the fresh-game default if none is usable.
    fn load(&self) -> GameState;

    /// Persists the given state, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the snapshot cannot be written. Callers
    /// performing autosaves log and swallow this; the in-memory state is
    /// never rolled back.
    fn save(&self, state: &GameState) -> Result<(), StoreError>;

    /// Removes the saved snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if an existing snapshot cannot be removed.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Decodes a snapshot document, degrading to the default on any failure.
fn restore_from_json(text: &str) -> GameState {
    match serde_json::from_str::<GameState>(text) {
        Ok(state) => match state.check() {
            Ok(()) => {
                info!(events = state.history().len(), "Game restored");
                state
            }
            Err(violations) => {
                warn!(?violations, "Saved game violates invariants, starting fresh");
                GameState::new()
            }
        },
        Err(error) => {
            warn!(%error, "Saved game is corrupt, starting fresh");
            GameState::new()
        }
    }
}
