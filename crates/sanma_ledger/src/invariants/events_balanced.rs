//! Zero-sum invariant: every recorded settlement balances to zero.

use super::Invariant;
use crate::GameState;

/// Invariant: every event in the history satisfies the zero-sum law.
///
/// Each hand transfers points within the closed set of three players and
/// the jackpot, never creating or destroying points. An event whose player
/// deltas and jackpot delta do not cancel was not produced by the ledger.
pub struct EventsBalanced;

impl Invariant<GameState> for EventsBalanced {
    fn holds(state: &GameState) -> bool {
        state.history().all().all(|event| event.is_balanced())
    }

    fn description() -> &'static str {
        "Every settlement event balances to zero across players and jackpot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BalanceChange, Fan, PlayerId, SettlementEvent, SettlementKind};

    #[test]
    fn test_fresh_game_holds() {
        assert!(EventsBalanced::holds(&GameState::new()));
    }

    #[test]
    fn test_all_settlement_kinds_hold() {
        let mut state = GameState::new();
        state.settle_no_win_draw();
        state.settle_no_win_draw();
        state
            .settle_discard_win(PlayerId::Two, PlayerId::One, Fan::Eleven)
            .expect("Settlement failed");
        state.settle_self_draw(PlayerId::Three, Fan::Six);

        assert!(EventsBalanced::holds(&state));
    }

    #[test]
    fn test_lopsided_event_violates() {
        let mut state = GameState::new();
        state.history.append(SettlementEvent::new(
            SettlementKind::DiscardWin,
            Some(PlayerId::One),
            Some(Fan::Six),
            0,
            vec![BalanceChange::new(PlayerId::One, 8)],
            0,
        ));

        assert!(!EventsBalanced::holds(&state));
    }
}
