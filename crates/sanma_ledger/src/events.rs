//! Settlement records and the append-only event log.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::{Fan, PlayerId};

/// How a hand ended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SettlementKind {
    /// A discarded tile completed another player's hand; the discarder pays.
    DiscardWin,
    /// The winner drew the completing tile; the other two players pay.
    SelfDrawWin,
    /// The hand ended with no winner; everyone feeds the jackpot.
    NoWinDraw,
}

/// One player's balance movement within a single settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct BalanceChange {
    player: PlayerId,
    delta: i64,
}

/// Immutable record of one settled hand.
///
/// Created by the ledger at the moment a hand is settled and never mutated
/// afterwards. The sum of all change deltas plus `jackpot_delta` is zero:
/// every hand transfers points within the closed set of three players and
/// the jackpot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SettlementEvent {
    at: DateTime<Utc>,
    kind: SettlementKind,
    actor: Option<PlayerId>,
    fan: Option<Fan>,
    jackpot_bonus: u64,
    changes: Vec<BalanceChange>,
    jackpot_delta: i64,
}

impl SettlementEvent {
    pub(crate) fn new(
        kind: SettlementKind,
        actor: Option<PlayerId>,
        fan: Option<Fan>,
        jackpot_bonus: u64,
        changes: Vec<BalanceChange>,
        jackpot_delta: i64,
    ) -> Self {
        Self {
            at: Utc::now(),
            kind,
            actor,
            fan,
            jackpot_bonus,
            changes,
            jackpot_delta,
        }
    }

    /// Checks the zero-sum law: player deltas and the jackpot delta cancel.
    pub fn is_balanced(&self) -> bool {
        let total: i64 = self.changes.iter().map(|change| *change.delta()).sum();
        total + self.jackpot_delta == 0
    }

    /// Returns the balance movement recorded for the given player, if any.
    pub fn change_for(&self, player: PlayerId) -> Option<i64> {
        self.changes
            .iter()
            .find(|change| *change.player() == player)
            .map(|change| *change.delta())
    }
}

/// Append-only settlement history, most recent first.
///
/// Entries are never edited or removed individually; the only wholesale
/// operation is [`EventLog::clear`], mirroring the ledger's reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: VecDeque<SettlementEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event as the most recent entry.
    pub fn append(&mut self, event: SettlementEvent) {
        self.events.push_front(event);
    }

    /// Empties the log.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Iterates over all events, most recent first.
    pub fn all(&self) -> impl Iterator<Item = &SettlementEvent> {
        self.events.iter()
    }

    /// Iterates over all events oldest first, the order they were applied.
    pub fn oldest_first(&self) -> impl Iterator<Item = &SettlementEvent> {
        self.events.iter().rev()
    }

    /// Returns the most recently recorded event.
    pub fn latest(&self) -> Option<&SettlementEvent> {
        self.events.front()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
