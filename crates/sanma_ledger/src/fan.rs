//! Fan-to-point lookup for winning hands.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Declared strength of a winning hand.
///
/// Only the scored range 6–11 fan is representable; anything else is
/// rejected when parsing with [`Fan::try_from`]. An 11-fan win is the
/// maximum and triggers the jackpot payout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Fan {
    /// 6 fan — 8 points.
    Six,
    /// 7 fan — 16 points.
    Seven,
    /// 8 fan — 24 points.
    Eight,
    /// 9 fan — 32 points.
    Nine,
    /// 10 fan — 64 points.
    Ten,
    /// 11 fan — 128 points. Pays out the jackpot.
    Eleven,
}

impl Fan {
    /// Returns the point value transferred for a win at this fan count.
    ///
    /// The table doubles at every step from 7 fan on; 6 fan is the 8-point
    /// base case rather than half of 16.
    pub fn points(self) -> i64 {
        match self {
            Self::Six => 8,
            Self::Seven => 16,
            Self::Eight => 24,
            Self::Nine => 32,
            Self::Ten => 64,
            Self::Eleven => 128,
        }
    }

    /// Returns the declared fan count as a number (6–11).
    pub fn value(self) -> u8 {
        match self {
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Eleven => 11,
        }
    }

    /// Whether a win at this fan count collects the jackpot.
    pub fn pays_jackpot(self) -> bool {
        self == Self::Eleven
    }
}

impl std::fmt::Display for Fan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Rejected fan count outside the scored range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("fan {} is outside the scored range 6-11", value)]
pub struct FanError {
    /// The rejected raw value.
    pub value: u8,
}

impl TryFrom<u8> for Fan {
    type Error = FanError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            9 => Ok(Self::Nine),
            10 => Ok(Self::Ten),
            11 => Ok(Self::Eleven),
            value => Err(FanError { value }),
        }
    }
}

impl From<Fan> for u8 {
    fn from(fan: Fan) -> Self {
        fan.value()
    }
}
