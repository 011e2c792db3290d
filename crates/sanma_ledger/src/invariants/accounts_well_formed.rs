//! Account shape invariant: three fixed seats with usable names.

use super::Invariant;
use crate::{GameState, PlayerId};

/// Invariant: the three accounts sit in seat order and keep non-empty names.
///
/// Seat ids are assigned at creation and never move; a snapshot whose
/// accounts are shuffled or blank-named did not come from the ledger.
pub struct AccountsWellFormed;

impl Invariant<GameState> for AccountsWellFormed {
    fn holds(state: &GameState) -> bool {
        let expected = [PlayerId::One, PlayerId::Two, PlayerId::Three];

        state
            .ledger()
            .accounts()
            .iter()
            .zip(expected)
            .all(|(account, id)| *account.id() == id && !account.name().trim().is_empty())
    }

    fn description() -> &'static str {
        "Accounts sit in seat order with non-empty names"
    }
}
