//! Game construction parameters
//!
//! `GameSetup` is the variant-selection surface handed to
//! [`Ledger::create_game`](crate::ledger::Ledger::create_game): each variant
//! names its participants and whatever stake parameters it takes.

use crate::error::LedgerError;
use crate::types::{AccountId, GameKind, Stake};
use serde::{Deserialize, Serialize};

/// Parameters for constructing one game, selecting the variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameSetup {
    /// One shared stake proposed to both players
    Standard {
        player1: AccountId,
        player2: AccountId,
        stake: i64,
    },
    /// No stake for either player; ratings never change
    Training {
        player1: AccountId,
        player2: AccountId,
    },
    /// A stake for exactly one designated player; only that player's rating
    /// can change
    HalfRating {
        player1: AccountId,
        player2: AccountId,
        rating_player: AccountId,
        stake: i64,
    },
}

impl GameSetup {
    /// The game variant this setup constructs
    pub fn kind(&self) -> GameKind {
        match self {
            GameSetup::Standard { .. } => GameKind::Standard,
            GameSetup::Training { .. } => GameKind::Training,
            GameSetup::HalfRating { .. } => GameKind::HalfRating,
        }
    }

    /// The two participants, in declaration order
    pub fn players(&self) -> (AccountId, AccountId) {
        match *self {
            GameSetup::Standard {
                player1, player2, ..
            }
            | GameSetup::Training { player1, player2 }
            | GameSetup::HalfRating {
                player1, player2, ..
            } => (player1, player2),
        }
    }

    /// Variant-specific stake validation.
    ///
    /// For HalfRating the designated player's membership is checked before
    /// the stake value.
    pub fn validate(&self) -> crate::error::Result<()> {
        match *self {
            GameSetup::Standard { stake, .. } => {
                if stake < 0 {
                    return Err(LedgerError::InvalidRating { rating: stake }.into());
                }
            }
            GameSetup::Training { .. } => {}
            GameSetup::HalfRating {
                player1,
                player2,
                rating_player,
                stake,
            } => {
                if rating_player != player1 && rating_player != player2 {
                    return Err(LedgerError::InvalidPlayer {
                        reason: "player who plays with rating is not in the game".to_string(),
                    }
                    .into());
                }
                if stake < 0 {
                    return Err(LedgerError::InvalidRating { rating: stake }.into());
                }
            }
        }
        Ok(())
    }

    /// Initial stakes for (player1, player2)
    pub fn initial_stakes(&self) -> (Stake, Stake) {
        match *self {
            GameSetup::Standard { stake, .. } => (Some(stake), Some(stake)),
            GameSetup::Training { .. } => (None, None),
            GameSetup::HalfRating {
                player1,
                rating_player,
                stake,
                ..
            } => {
                if rating_player == player1 {
                    (Some(stake), None)
                } else {
                    (None, Some(stake))
                }
            }
        }
    }
}
