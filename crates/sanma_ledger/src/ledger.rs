//! The scoring ledger: three balances, the jackpot, and the settlement rules.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    BalanceChange, Fan, PlayerAccount, PlayerId, SettlementEvent, SettlementKind,
};

/// Points every player forfeits on a no-win draw.
pub const DRAW_PENALTY: i64 = 10;

/// Points added to the jackpot by a no-win draw (the three penalties pooled).
pub const DRAW_JACKPOT_GAIN: i64 = 30;

/// Errors for rejected settlement arguments. The ledger fails the call and
/// leaves all state untouched; it never silently settles for zero points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LedgerError {
    /// Winner and loser of a discard win must be different players.
    #[display("winner and loser must be different players")]
    SamePlayer,
    /// A renamed player must keep a non-empty display name.
    #[display("player name cannot be empty")]
    EmptyName,
}

/// Running balances for the three players plus the shared jackpot.
///
/// Every settlement operation validates its arguments first and mutates
/// second, so a call either applies in full or leaves the ledger unchanged.
/// Each returns the [`SettlementEvent`] describing exactly what was applied;
/// recording that event is the caller's job (see [`GameState`]).
///
/// [`GameState`]: crate::GameState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScoreLedger {
    pub(crate) accounts: [PlayerAccount; 3],
    pub(crate) jackpot: u64,
}

impl ScoreLedger {
    /// Creates a fresh ledger: default names, zero balances, zero jackpot.
    pub fn new() -> Self {
        Self {
            accounts: [
                PlayerAccount::new(PlayerId::One),
                PlayerAccount::new(PlayerId::Two),
                PlayerAccount::new(PlayerId::Three),
            ],
            jackpot: 0,
        }
    }

    /// Returns the account for the given seat.
    pub fn account(&self, id: PlayerId) -> &PlayerAccount {
        &self.accounts[id.index()]
    }

    /// Returns the three balances in seat order.
    pub fn balances(&self) -> [i64; 3] {
        [
            *self.accounts[0].balance(),
            *self.accounts[1].balance(),
            *self.accounts[2].balance(),
        ]
    }

    fn account_mut(&mut self, id: PlayerId) -> &mut PlayerAccount {
        &mut self.accounts[id.index()]
    }

    /// Drains the jackpot if this fan count pays it out.
    ///
    /// Must be called after all argument validation: it mutates the jackpot
    /// as part of the same transaction as the win it belongs to.
    fn take_jackpot_bonus(&mut self, fan: Fan) -> u64 {
        if fan.pays_jackpot() {
            std::mem::take(&mut self.jackpot)
        } else {
            0
        }
    }

    /// Settles a discard win (出銃): the discarder alone pays the winner.
    ///
    /// At 11 fan the entire jackpot is added to the winner's gain and zeroed
    /// in the same transaction. The third player is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::SamePlayer`] if winner and loser coincide.
    #[instrument(skip(self))]
    pub fn settle_discard_win(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
        fan: Fan,
    ) -> Result<SettlementEvent, LedgerError> {
        if winner == loser {
            return Err(LedgerError::SamePlayer);
        }

        let points = fan.points();
        let bonus = self.take_jackpot_bonus(fan);
        let gain = points + bonus as i64;

        self.account_mut(winner).credit(gain);
        self.account_mut(loser).debit(points);

        let event = SettlementEvent::new(
            SettlementKind::DiscardWin,
            Some(winner),
            Some(fan),
            bonus,
            vec![
                BalanceChange::new(winner, gain),
                BalanceChange::new(loser, -points),
            ],
            -(bonus as i64),
        );

        info!(
            winner = %winner,
            loser = %loser,
            fan = %fan,
            points,
            bonus,
            "Discard win settled"
        );
        Ok(event)
    }

    /// Settles a self-draw win (自摸): the other two players jointly pay.
    ///
    /// Each opponent pays half the point value; every tabled value is even,
    /// so the halves are exact. The jackpot rule matches the discard win.
    #[instrument(skip(self))]
    pub fn settle_self_draw(&mut self, winner: PlayerId, fan: Fan) -> SettlementEvent {
        let points = fan.points();
        let share = points / 2;
        let bonus = self.take_jackpot_bonus(fan);
        let gain = points + bonus as i64;
        let [first, second] = winner.others();

        self.account_mut(winner).credit(gain);
        self.account_mut(first).debit(share);
        self.account_mut(second).debit(share);

        let event = SettlementEvent::new(
            SettlementKind::SelfDrawWin,
            Some(winner),
            Some(fan),
            bonus,
            vec![
                BalanceChange::new(winner, gain),
                BalanceChange::new(first, -share),
                BalanceChange::new(second, -share),
            ],
            -(bonus as i64),
        );

        info!(winner = %winner, fan = %fan, points, bonus, "Self-draw win settled");
        event
    }

    /// Settles a no-win draw (和): every player feeds the jackpot.
    #[instrument(skip(self))]
    pub fn settle_no_win_draw(&mut self) -> SettlementEvent {
        self.jackpot += DRAW_JACKPOT_GAIN as u64;
        for account in &mut self.accounts {
            account.debit(DRAW_PENALTY);
        }

        let event = SettlementEvent::new(
            SettlementKind::NoWinDraw,
            None,
            None,
            0,
            vec![
                BalanceChange::new(PlayerId::One, -DRAW_PENALTY),
                BalanceChange::new(PlayerId::Two, -DRAW_PENALTY),
                BalanceChange::new(PlayerId::Three, -DRAW_PENALTY),
            ],
            DRAW_JACKPOT_GAIN,
        );

        info!(jackpot = self.jackpot, "No-win draw settled");
        event
    }

    /// Replaces a player's display name.
    ///
    /// Leading and trailing whitespace is trimmed. Balances and history are
    /// unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::EmptyName`] if the trimmed name is empty; the
    /// existing name is kept.
    #[instrument(skip(self))]
    pub fn rename_player(&mut self, id: PlayerId, new_name: &str) -> Result<(), LedgerError> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::EmptyName);
        }

        self.account_mut(id).set_name(trimmed.to_string());
        info!(player = %id, name = %trimmed, "Player renamed");
        Ok(())
    }

    /// Returns all balances and the jackpot to zero. Names are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        for account in &mut self.accounts {
            account.zero_balance();
        }
        self.jackpot = 0;
        info!("Ledger reset");
    }
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_player_discard_win_rejected_without_mutation() {
        let mut ledger = ScoreLedger::new();
        ledger.jackpot = 30;
        let before = ledger.clone();

        let result = ledger.settle_discard_win(PlayerId::One, PlayerId::One, Fan::Eleven);
        assert_eq!(result, Err(LedgerError::SamePlayer));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_discard_win_leaves_third_player_untouched() {
        let mut ledger = ScoreLedger::new();
        ledger
            .settle_discard_win(PlayerId::Two, PlayerId::Three, Fan::Seven)
            .expect("Settlement failed");
        assert_eq!(ledger.balances(), [0, 16, -16]);
    }

    #[test]
    fn test_self_draw_splits_payment_evenly() {
        let mut ledger = ScoreLedger::new();
        let event = ledger.settle_self_draw(PlayerId::Three, Fan::Ten);
        assert_eq!(ledger.balances(), [-32, -32, 64]);
        assert!(event.is_balanced());
    }

    #[test]
    fn test_draw_constants_cancel_out() {
        assert_eq!(3 * DRAW_PENALTY, DRAW_JACKPOT_GAIN);
    }

    #[test]
    fn test_rename_trims_whitespace() {
        let mut ledger = ScoreLedger::new();
        ledger
            .rename_player(PlayerId::One, "  Akira  ")
            .expect("Rename failed");
        assert_eq!(ledger.account(PlayerId::One).name(), "Akira");
    }

    #[test]
    fn test_rename_rejects_blank_name() {
        let mut ledger = ScoreLedger::new();
        let result = ledger.rename_player(PlayerId::One, "   ");
        assert_eq!(result, Err(LedgerError::EmptyName));
        assert_eq!(ledger.account(PlayerId::One).name(), "Player 1");
    }

    #[test]
    fn test_reset_keeps_names() {
        let mut ledger = ScoreLedger::new();
        ledger.rename_player(PlayerId::Two, "Mei").expect("Rename failed");
        ledger.settle_no_win_draw();
        ledger.reset();

        assert_eq!(ledger.balances(), [0, 0, 0]);
        assert_eq!(*ledger.jackpot(), 0);
        assert_eq!(ledger.account(PlayerId::Two).name(), "Mei");
    }
}
