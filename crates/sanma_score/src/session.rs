//! Game session: in-memory state plus its persistence adapter.

use sanma_ledger::{Fan, GameState, LedgerError, PlayerId, SettlementEvent};
use tracing::{info, instrument, warn};

use crate::confirm::ConfirmationGate;
use crate::store::ScoreStore;

/// One running game bound to a store.
///
/// The session owns the [`GameState`] and is its only writer. Every
/// mutation is followed by a fire-and-forget save: persistence failures are
/// logged and swallowed, never blocking or rolling back the in-memory
/// state. Destructive operations are sequenced confirm-then-mutate through
/// an injected [`ConfirmationGate`].
#[derive(Debug)]
pub struct ScoreSession<S: ScoreStore> {
    state: GameState,
    store: S,
}

impl<S: ScoreStore> ScoreSession<S> {
    /// Opens a session, resuming the stored game or starting fresh.
    #[instrument(skip(store))]
    pub fn open(store: S) -> Self {
        let state = store.load();
        info!(
            events = state.history().len(),
            jackpot = *state.ledger().jackpot(),
            "Session opened"
        );
        Self { state, store }
    }

    /// Read-only view of the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Settles a discard win and autosaves.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::SamePlayer`] if winner and loser coincide;
    /// nothing is saved in that case.
    pub fn settle_discard_win(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
        fan: Fan,
    ) -> Result<SettlementEvent, LedgerError> {
        let event = self.state.settle_discard_win(winner, loser, fan)?;
        self.autosave();
        Ok(event)
    }

    /// Settles a self-draw win and autosaves.
    pub fn settle_self_draw(&mut self, winner: PlayerId, fan: Fan) -> SettlementEvent {
        let event = self.state.settle_self_draw(winner, fan);
        self.autosave();
        event
    }

    /// Settles a no-win draw and autosaves.
    pub fn settle_no_win_draw(&mut self) -> SettlementEvent {
        let event = self.state.settle_no_win_draw();
        self.autosave();
        event
    }

    /// Renames a player and autosaves.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::EmptyName`] if the trimmed name is empty.
    pub fn rename_player(&mut self, id: PlayerId, new_name: &str) -> Result<(), LedgerError> {
        self.state.rename_player(id, new_name)?;
        self.autosave();
        Ok(())
    }

    /// Resets the game after confirmation.
    ///
    /// Returns `true` if the gate approved and the reset was applied. On
    /// approval the stored snapshot is removed as well; declining leaves
    /// everything untouched.
    #[instrument(skip(self, gate))]
    pub async fn reset(&mut self, gate: &dyn ConfirmationGate) -> bool {
        let approved = gate
            .confirm(
                "Reset game",
                "This clears all balances, the jackpot, and the full history.",
            )
            .await;

        if !approved {
            info!("Reset declined");
            return false;
        }

        self.state.reset();
        if let Err(error) = self.store.clear() {
            warn!(%error, "Failed to clear saved game");
        }
        true
    }

    fn autosave(&self) {
        if let Err(error) = self.store.save(&self.state) {
            warn!(%error, "Autosave failed, keeping in-memory state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::{AutoApprove, AutoDeny};
    use crate::store::{MemoryStore, ScoreStore};

    #[test]
    fn test_settlements_persist_across_reopen() {
        let store = MemoryStore::new();
        {
            let mut session = ScoreSession::open(store.clone());
            session
                .settle_discard_win(PlayerId::One, PlayerId::Two, Fan::Eight)
                .expect("Settlement failed");
            session.settle_no_win_draw();
        }

        let resumed = ScoreSession::open(store);
        assert_eq!(resumed.state().ledger().balances(), [14, -34, -10]);
        assert_eq!(*resumed.state().ledger().jackpot(), 30);
        assert_eq!(resumed.state().history().len(), 2);
    }

    #[tokio::test]
    async fn test_reset_requires_approval() {
        let store = MemoryStore::new();
        let mut session = ScoreSession::open(store.clone());
        session.settle_no_win_draw();

        assert!(!session.reset(&AutoDeny).await);
        assert_eq!(session.state().history().len(), 1);

        assert!(session.reset(&AutoApprove).await);
        assert!(session.state().history().is_empty());
        assert_eq!(session.state().ledger().balances(), [0, 0, 0]);

        // The stored snapshot is gone too.
        assert!(store.load().history().is_empty());
    }

    #[test]
    fn test_rejected_settlement_does_not_save() {
        let store = MemoryStore::new();
        let mut session = ScoreSession::open(store.clone());

        let result = session.settle_discard_win(PlayerId::Two, PlayerId::Two, Fan::Six);
        assert!(result.is_err());
        assert!(store.load().history().is_empty());
    }
}
