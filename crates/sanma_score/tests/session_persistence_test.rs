//! End-to-end session tests against a file-backed store.

use sanma_ledger::{Fan, PlayerId};
use sanma_score::{AutoApprove, JsonFileStore, ScoreSession, ScoreStore};
use tempfile::TempDir;

#[test]
fn test_game_resumes_where_it_left_off() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game.json");

    {
        let mut session = ScoreSession::open(JsonFileStore::new(&path));
        session.rename_player(PlayerId::Three, "Yuki").expect("Rename failed");
        session.settle_no_win_draw();
        session
            .settle_discard_win(PlayerId::Three, PlayerId::One, Fan::Ten)
            .expect("Settlement failed");
    }

    let resumed = ScoreSession::open(JsonFileStore::new(&path));
    let state = resumed.state();

    assert_eq!(state.ledger().balances(), [-74, -10, 54]);
    assert_eq!(*state.ledger().jackpot(), 30);
    assert_eq!(state.ledger().account(PlayerId::Three).name(), "Yuki");
    assert_eq!(state.history().len(), 2);
    assert!(state.check().is_ok());
}

#[tokio::test]
async fn test_approved_reset_wipes_the_saved_game_too() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game.json");

    let mut session = ScoreSession::open(JsonFileStore::new(&path));
    session.settle_self_draw(PlayerId::One, Fan::Eight);
    assert!(session.reset(&AutoApprove).await);

    // A later session starts from nothing.
    let store = JsonFileStore::new(&path);
    assert!(store.load().history().is_empty());
    assert_eq!(store.load().ledger().balances(), [0, 0, 0]);
}

#[test]
fn test_jackpot_flows_through_a_whole_game() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game.json");
    let mut session = ScoreSession::open(JsonFileStore::new(&path));

    // Two empty hands build a 60-point pot.
    session.settle_no_win_draw();
    session.settle_no_win_draw();
    assert_eq!(*session.state().ledger().jackpot(), 60);

    // A mid-range win does not touch it.
    session
        .settle_discard_win(PlayerId::One, PlayerId::Two, Fan::Eight)
        .expect("Settlement failed");
    assert_eq!(*session.state().ledger().jackpot(), 60);

    // The maximum win takes the whole pot.
    let event = session.settle_self_draw(PlayerId::Two, Fan::Eleven);
    assert_eq!(*event.jackpot_bonus(), 60);
    assert_eq!(*session.state().ledger().jackpot(), 0);

    // Closed system: everything still cancels out.
    let total: i64 = session.state().ledger().balances().iter().sum();
    assert_eq!(total + *session.state().ledger().jackpot() as i64, 0);
    assert!(session.state().check().is_ok());
}
