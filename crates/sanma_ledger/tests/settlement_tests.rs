//! Settlement rules exercised through the public GameState surface.

use sanma_ledger::{Fan, GameState, LedgerError, PlayerId, SettlementKind};
use strum::IntoEnumIterator;

#[test]
fn test_discard_win_moves_points_from_loser_to_winner() {
    let mut state = GameState::new();
    let event = state
        .settle_discard_win(PlayerId::One, PlayerId::Two, Fan::Eight)
        .expect("Settlement failed");

    assert_eq!(state.ledger().balances(), [24, -24, 0]);
    assert_eq!(*state.ledger().jackpot(), 0);
    assert_eq!(*event.kind(), SettlementKind::DiscardWin);
    assert_eq!(event.changes().len(), 2);
    assert!(event.is_balanced());
}

#[test]
fn test_self_draw_splits_cost_between_opponents() {
    let mut state = GameState::new();
    let event = state.settle_self_draw(PlayerId::One, Fan::Six);

    assert_eq!(state.ledger().balances(), [8, -4, -4]);
    assert_eq!(*state.ledger().jackpot(), 0);
    assert_eq!(event.changes().len(), 3);
    assert!(event.is_balanced());
}

#[test]
fn test_no_win_draw_feeds_jackpot() {
    let mut state = GameState::new();
    let event = state.settle_no_win_draw();

    assert_eq!(state.ledger().balances(), [-10, -10, -10]);
    assert_eq!(*state.ledger().jackpot(), 30);
    assert_eq!(*event.kind(), SettlementKind::NoWinDraw);
    assert_eq!(*event.jackpot_delta(), 30);
    assert!(event.is_balanced());
}

#[test]
fn test_eleven_fan_discard_win_collects_jackpot() {
    let mut state = GameState::new();
    state.settle_no_win_draw();

    let event = state
        .settle_discard_win(PlayerId::Two, PlayerId::Three, Fan::Eleven)
        .expect("Settlement failed");

    // Winner already paid 10 into the pot, so 158 gained lands on -10.
    assert_eq!(state.ledger().balances(), [-10, 148, -138]);
    assert_eq!(*state.ledger().jackpot(), 0);
    assert_eq!(*event.jackpot_bonus(), 30);
    assert_eq!(*event.jackpot_delta(), -30);
    assert_eq!(event.change_for(PlayerId::Two), Some(158));
    assert_eq!(event.change_for(PlayerId::Three), Some(-128));
    assert!(event.is_balanced());
}

#[test]
fn test_eleven_fan_self_draw_collects_jackpot() {
    let mut state = GameState::new();
    state.settle_no_win_draw();
    state.settle_no_win_draw();

    let event = state.settle_self_draw(PlayerId::Three, Fan::Eleven);

    assert_eq!(*state.ledger().jackpot(), 0);
    assert_eq!(*event.jackpot_bonus(), 60);
    assert_eq!(event.change_for(PlayerId::Three), Some(128 + 60));
    assert!(event.is_balanced());
}

#[test]
fn test_lower_fan_wins_leave_jackpot_alone() {
    let mut state = GameState::new();
    state.settle_no_win_draw();

    for fan in Fan::iter().filter(|fan| !fan.pays_jackpot()) {
        state
            .settle_discard_win(PlayerId::One, PlayerId::Two, fan)
            .expect("Settlement failed");
        state.settle_self_draw(PlayerId::Two, fan);
    }

    assert_eq!(*state.ledger().jackpot(), 30);
}

#[test]
fn test_empty_jackpot_pays_no_bonus_at_eleven_fan() {
    let mut state = GameState::new();
    let event = state
        .settle_discard_win(PlayerId::One, PlayerId::Two, Fan::Eleven)
        .expect("Settlement failed");

    assert_eq!(*event.jackpot_bonus(), 0);
    assert_eq!(event.change_for(PlayerId::One), Some(128));
}

#[test]
fn test_every_settlement_is_zero_sum() {
    let mut state = GameState::new();
    state.settle_no_win_draw();
    state
        .settle_discard_win(PlayerId::Three, PlayerId::One, Fan::Seven)
        .expect("Settlement failed");
    state.settle_self_draw(PlayerId::One, Fan::Ten);
    state.settle_no_win_draw();
    state
        .settle_discard_win(PlayerId::Two, PlayerId::One, Fan::Eleven)
        .expect("Settlement failed");

    assert!(state.history().all().all(|event| event.is_balanced()));

    // Balances and jackpot always cancel across the whole closed system.
    let total: i64 = state.ledger().balances().iter().sum();
    assert_eq!(total + *state.ledger().jackpot() as i64, 0);

    assert!(state.check().is_ok());
}

#[test]
fn test_history_orders_most_recent_first() {
    let mut state = GameState::new();
    state
        .settle_discard_win(PlayerId::One, PlayerId::Two, Fan::Six)
        .expect("Settlement failed");
    state.settle_self_draw(PlayerId::Two, Fan::Seven);
    state.settle_no_win_draw();

    let kinds: Vec<_> = state.history().all().map(|event| *event.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SettlementKind::NoWinDraw,
            SettlementKind::SelfDrawWin,
            SettlementKind::DiscardWin,
        ]
    );
}

#[test]
fn test_reset_restores_fresh_values_from_any_state() {
    let mut state = GameState::new();
    state.settle_no_win_draw();
    state.settle_self_draw(PlayerId::One, Fan::Eleven);
    state.rename_player(PlayerId::One, "Akira").expect("Rename failed");

    state.reset();

    assert_eq!(state.ledger().balances(), [0, 0, 0]);
    assert_eq!(*state.ledger().jackpot(), 0);
    assert!(state.history().is_empty());
    // Renames survive a reset; only points and history are wiped.
    assert_eq!(state.ledger().account(PlayerId::One).name(), "Akira");
    assert!(state.check().is_ok());
}

#[test]
fn test_identity_collision_is_rejected() {
    let mut state = GameState::new();
    for id in PlayerId::iter() {
        let result = state.settle_discard_win(id, id, Fan::Six);
        assert_eq!(result, Err(LedgerError::SamePlayer));
    }
    assert_eq!(state.ledger().balances(), [0, 0, 0]);
    assert!(state.history().is_empty());
}
