//! Player identity and account state.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Seat identifier for one of the three fixed players.
///
/// Exactly three players exist for the lifetime of a game; ids are assigned
/// at creation and never change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerId {
    /// Player 1.
    One,
    /// Player 2.
    Two,
    /// Player 3.
    Three,
}

impl PlayerId {
    /// Returns the zero-based seat index (0–2).
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    /// Returns the one-based player number (1–3).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Returns the other two seats, in id order.
    pub fn others(self) -> [PlayerId; 2] {
        match self {
            Self::One => [Self::Two, Self::Three],
            Self::Two => [Self::One, Self::Three],
            Self::Three => [Self::One, Self::Two],
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Rejected player id outside 1–3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("player id {} is outside 1-3", value)]
pub struct PlayerIdError {
    /// The rejected raw value.
    pub value: u8,
}

impl TryFrom<u8> for PlayerId {
    type Error = PlayerIdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            value => Err(PlayerIdError { value }),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.number()
    }
}

/// One player's account: immutable seat id, display name, running balance.
///
/// Balances and names are mutated only through [`ScoreLedger`] operations.
///
/// [`ScoreLedger`]: crate::ScoreLedger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PlayerAccount {
    id: PlayerId,
    name: String,
    balance: i64,
}

impl PlayerAccount {
    /// Creates the fresh-game account for a seat: default name, zero balance.
    pub(crate) fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: format!("Player {}", id.number()),
            balance: 0,
        }
    }

    pub(crate) fn credit(&mut self, amount: i64) {
        self.balance += amount;
    }

    pub(crate) fn debit(&mut self, amount: i64) {
        self.balance -= amount;
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn zero_balance(&mut self) {
        self.balance = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_fresh_account_defaults() {
        let account = PlayerAccount::new(PlayerId::Two);
        assert_eq!(*account.id(), PlayerId::Two);
        assert_eq!(account.name(), "Player 2");
        assert_eq!(*account.balance(), 0);
    }

    #[test]
    fn test_others_excludes_self_in_order() {
        assert_eq!(PlayerId::One.others(), [PlayerId::Two, PlayerId::Three]);
        assert_eq!(PlayerId::Two.others(), [PlayerId::One, PlayerId::Three]);
        assert_eq!(PlayerId::Three.others(), [PlayerId::One, PlayerId::Two]);
    }

    #[test]
    fn test_id_round_trips_through_number() {
        for id in PlayerId::iter() {
            assert_eq!(PlayerId::try_from(id.number()), Ok(id));
        }
    }

    #[test]
    fn test_out_of_range_id_rejected() {
        for raw in [0, 4, 5, u8::MAX] {
            assert!(PlayerId::try_from(raw).is_err());
        }
    }
}
