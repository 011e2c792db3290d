//! Complete game state: the ledger plus its settlement history.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::invariants::{GameStateInvariants, InvariantSet, InvariantViolation};
use crate::{EventLog, Fan, LedgerError, PlayerId, ScoreLedger, SettlementEvent};

/// The full state of one game: three accounts, the jackpot, and the
/// append-only settlement history.
///
/// Created fresh (all zeros, empty history) or restored from a persisted
/// snapshot. Mutated only through the settlement operations below and
/// [`GameState::reset`]; each settlement applies the ledger transfer and
/// records the resulting event in one step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameState {
    pub(crate) ledger: ScoreLedger,
    pub(crate) history: EventLog,
}

impl GameState {
    /// Creates a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settles a discard win and records it.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::SamePlayer`] if winner and loser coincide;
    /// neither balances nor history change in that case.
    pub fn settle_discard_win(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
        fan: Fan,
    ) -> Result<SettlementEvent, LedgerError> {
        let event = self.ledger.settle_discard_win(winner, loser, fan)?;
        self.history.append(event.clone());
        Ok(event)
    }

    /// Settles a self-draw win and records it.
    pub fn settle_self_draw(&mut self, winner: PlayerId, fan: Fan) -> SettlementEvent {
        let event = self.ledger.settle_self_draw(winner, fan);
        self.history.append(event.clone());
        event
    }

    /// Settles a no-win draw and records it.
    pub fn settle_no_win_draw(&mut self) -> SettlementEvent {
        let event = self.ledger.settle_no_win_draw();
        self.history.append(event.clone());
        event
    }

    /// Replaces a player's display name. History is unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::EmptyName`] if the trimmed name is empty.
    pub fn rename_player(&mut self, id: PlayerId, new_name: &str) -> Result<(), LedgerError> {
        self.ledger.rename_player(id, new_name)
    }

    /// Returns the game to fresh values: zero balances, zero jackpot, empty
    /// history. Names are kept. Idempotent, and irreversible — callers gate
    /// it behind an explicit confirmation.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.ledger.reset();
        self.history.clear();
        info!("Game state reset");
    }

    /// Runs the full invariant set over this state.
    ///
    /// # Errors
    ///
    /// Returns the list of violated invariants, used by tests and by stores
    /// to reject corrupt snapshots on restore.
    pub fn check(&self) -> Result<(), Vec<InvariantViolation>> {
        GameStateInvariants::check_all(self)
    }
}
