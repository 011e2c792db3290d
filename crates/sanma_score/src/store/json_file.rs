//! JSON file store: one snapshot document on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use sanma_ledger::GameState;
use tracing::{debug, instrument, warn};

use crate::store::{restore_from_json, ScoreStore, StoreError};

/// Stores the snapshot as a single JSON file at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at the given path.
    ///
    /// The file is created on first save; a missing file loads as a fresh
    /// game.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> GameState {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!("No saved game, starting fresh");
                return GameState::new();
            }
            Err(error) => {
                warn!(%error, "Failed to read saved game, starting fresh");
                return GameState::new();
            }
        };

        restore_from_json(&text)
    }

    #[instrument(skip(self, state), fields(path = %self.path.display()))]
    fn save(&self, state: &GameState) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, text)?;
        debug!(events = state.history().len(), "Game saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StoreError::from(error)),
        }
    }
}
