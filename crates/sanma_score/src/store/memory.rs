//! In-memory store for tests and ephemeral sessions.

use std::sync::{Arc, Mutex};

use sanma_ledger::GameState;
use tracing::{debug, instrument};

use crate::store::{restore_from_json, ScoreStore, StoreError};

/// Keeps the snapshot document in memory.
///
/// Clones share the same slot, so a session and a test can observe the same
/// saved data. Snapshots pass through the same JSON encoding as the file
/// store, keeping round-trip behavior identical.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    #[instrument(skip(self))]
    fn load(&self) -> GameState {
        let slot = self.slot.lock().expect("Store mutex poisoned");
        match slot.as_deref() {
            Some(text) => restore_from_json(text),
            None => {
                debug!("No saved game, starting fresh");
                GameState::new()
            }
        }
    }

    #[instrument(skip(self, state))]
    fn save(&self, state: &GameState) -> Result<(), StoreError> {
        let text = serde_json::to_string(state)?;
        *self.slot.lock().expect("Store mutex poisoned") = Some(text);
        Ok(())
    }

    #[instrument(skip(self))]
    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().expect("Store mutex poisoned") = None;
        Ok(())
    }
}
