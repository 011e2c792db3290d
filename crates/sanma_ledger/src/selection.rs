//! Declaration flow for a single player card.
//!
//! The presentation layer walks a player through declaring an outcome in
//! steps: pick the win type, pick the discarder (discard wins only), pick
//! the fan count. This module is that state machine — an explicit enum of
//! stages plus the partial arguments gathered so far. It never touches the
//! ledger; completing the flow yields a [`SettlementRequest`] for the caller
//! to hand to [`GameState`].
//!
//! [`GameState`]: crate::GameState

use derive_more::{Display, Error};
use tracing::{debug, instrument};

use crate::{Fan, PlayerId, SettlementKind};

/// A fully specified outcome, ready to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementRequest {
    /// A discard win: the named loser pays the winner.
    DiscardWin {
        /// The player whose hand completed.
        winner: PlayerId,
        /// The player who discarded the winning tile.
        loser: PlayerId,
        /// Declared hand strength.
        fan: Fan,
    },
    /// A self-draw win: both opponents pay the winner.
    SelfDrawWin {
        /// The player whose hand completed.
        winner: PlayerId,
        /// Declared hand strength.
        fan: Fan,
    },
    /// A no-win draw. Needs no further arguments.
    NoWinDraw,
}

/// Step the declaration flow is currently waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Nothing chosen yet; waiting for the win type.
    Idle,
    /// Win type chosen; discard wins wait for an opponent, self-draws for fan.
    TypeChosen(SettlementKind),
    /// Discard win with opponent chosen; waiting for fan.
    OpponentChosen(PlayerId),
}

/// A transition was requested that the current stage does not accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SelectionError {
    /// The stage was not waiting for a win type.
    #[display("win type already chosen")]
    TypeAlreadyChosen,
    /// Only a discard win needs an opponent, and only once.
    #[display("not waiting for an opponent")]
    NotExpectingOpponent,
    /// The declaring player cannot name themselves as the discarder.
    #[display("discarder must be another player")]
    OpponentIsSelf,
    /// The stage was not waiting for a fan count.
    #[display("not waiting for a fan count")]
    NotExpectingFan,
}

/// Selection state for one player's declaration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    actor: PlayerId,
    stage: Stage,
}

impl Selection {
    /// Opens the flow for the given player's card.
    pub fn new(actor: PlayerId) -> Self {
        Self {
            actor,
            stage: Stage::Idle,
        }
    }

    /// The player this flow declares for.
    pub fn actor(&self) -> PlayerId {
        self.actor
    }

    /// Whether the flow is back at its initial step.
    pub fn is_idle(&self) -> bool {
        self.stage == Stage::Idle
    }

    /// Whether the flow is waiting for an opponent choice.
    pub fn awaiting_opponent(&self) -> bool {
        self.stage == Stage::TypeChosen(SettlementKind::DiscardWin)
    }

    /// Whether the flow is waiting for a fan choice.
    pub fn awaiting_fan(&self) -> bool {
        matches!(
            self.stage,
            Stage::TypeChosen(SettlementKind::SelfDrawWin) | Stage::OpponentChosen(_)
        )
    }

    /// Chooses the win type.
    ///
    /// A no-win draw needs no further input and completes immediately; the
    /// other kinds advance the flow and return `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::TypeAlreadyChosen`] unless the flow is idle.
    #[instrument(skip(self), fields(actor = %self.actor))]
    pub fn choose_kind(
        &mut self,
        kind: SettlementKind,
    ) -> Result<Option<SettlementRequest>, SelectionError> {
        if self.stage != Stage::Idle {
            return Err(SelectionError::TypeAlreadyChosen);
        }

        if kind == SettlementKind::NoWinDraw {
            debug!("No-win draw declared, short-circuiting");
            return Ok(Some(SettlementRequest::NoWinDraw));
        }

        self.stage = Stage::TypeChosen(kind);
        debug!(?kind, "Win type chosen");
        Ok(None)
    }

    /// Chooses which player discarded the winning tile.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NotExpectingOpponent`] unless a discard win
    /// was chosen, or [`SelectionError::OpponentIsSelf`] for the actor's own
    /// seat.
    #[instrument(skip(self), fields(actor = %self.actor))]
    pub fn choose_opponent(&mut self, opponent: PlayerId) -> Result<(), SelectionError> {
        if self.stage != Stage::TypeChosen(SettlementKind::DiscardWin) {
            return Err(SelectionError::NotExpectingOpponent);
        }
        if opponent == self.actor {
            return Err(SelectionError::OpponentIsSelf);
        }

        self.stage = Stage::OpponentChosen(opponent);
        debug!(opponent = %opponent, "Opponent chosen");
        Ok(())
    }

    /// Chooses the fan count, completing the flow.
    ///
    /// The flow returns to idle and the finished request is handed back.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NotExpectingFan`] unless a self-draw was
    /// chosen or a discard win already has its opponent.
    #[instrument(skip(self), fields(actor = %self.actor))]
    pub fn choose_fan(&mut self, fan: Fan) -> Result<SettlementRequest, SelectionError> {
        let request = match self.stage {
            Stage::TypeChosen(SettlementKind::SelfDrawWin) => SettlementRequest::SelfDrawWin {
                winner: self.actor,
                fan,
            },
            Stage::OpponentChosen(loser) => SettlementRequest::DiscardWin {
                winner: self.actor,
                loser,
                fan,
            },
            _ => return Err(SelectionError::NotExpectingFan),
        };

        self.stage = Stage::Idle;
        debug!(fan = %fan, "Declaration complete");
        Ok(request)
    }

    /// Steps one stage back toward idle, discarding the latest choice.
    pub fn back(&mut self) {
        self.stage = match self.stage {
            Stage::OpponentChosen(_) => Stage::TypeChosen(SettlementKind::DiscardWin),
            _ => Stage::Idle,
        };
    }
}
