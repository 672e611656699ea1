//! Game record state and resolution bookkeeping

use crate::game::setup::GameSetup;
use crate::types::{AccountId, GameId, GameKind, GameResult, Stake};
use crate::utils::{current_timestamp, generate_game_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single match between two accounts.
///
/// Before resolution only the identity, participants, and proposed stakes are
/// set. Resolution fills in the winner, overwrites the stakes with the
/// policy-adjusted deltas that were actually applied, and snapshots both
/// players' resulting ratings. Records are never destroyed; they persist as
/// history entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub kind: GameKind,
    pub player1: AccountId,
    pub player2: AccountId,
    pub player1_stake: Stake,
    pub player2_stake: Stake,
    pub winner: Option<AccountId>,
    pub player1_rating_after: Option<i64>,
    pub player2_rating_after: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl GameRecord {
    /// Create an unresolved game record from validated setup parameters
    pub(crate) fn new(setup: &GameSetup) -> Self {
        let (player1, player2) = setup.players();
        let (player1_stake, player2_stake) = setup.initial_stakes();
        Self {
            id: generate_game_id(),
            kind: setup.kind(),
            player1,
            player2,
            player1_stake,
            player2_stake,
            winner: None,
            player1_rating_after: None,
            player2_rating_after: None,
            created_at: current_timestamp(),
            resolved_at: None,
        }
    }

    /// Whether the game has been resolved
    pub fn is_resolved(&self) -> bool {
        self.winner.is_some()
    }

    /// The opponent of the given participant, if they are in this game
    pub fn opponent_of(&self, account_id: AccountId) -> Option<AccountId> {
        if account_id == self.player1 {
            Some(self.player2)
        } else if account_id == self.player2 {
            Some(self.player1)
        } else {
            None
        }
    }

    /// The stake (or, after resolution, the applied delta) of a participant
    pub fn stake_of(&self, account_id: AccountId) -> Stake {
        if account_id == self.player1 {
            self.player1_stake
        } else if account_id == self.player2 {
            self.player2_stake
        } else {
            None
        }
    }

    pub(crate) fn set_stake(&mut self, account_id: AccountId, stake: Stake) {
        if account_id == self.player1 {
            self.player1_stake = stake;
        } else if account_id == self.player2 {
            self.player2_stake = stake;
        }
    }

    /// A participant's rating snapshot immediately after resolution
    pub fn rating_after(&self, account_id: AccountId) -> Option<i64> {
        if account_id == self.player1 {
            self.player1_rating_after
        } else if account_id == self.player2 {
            self.player2_rating_after
        } else {
            None
        }
    }

    /// The outcome relative to a participant, once resolved
    pub fn result_for(&self, account_id: AccountId) -> Option<GameResult> {
        let winner = self.winner?;
        if winner == account_id {
            Some(GameResult::Win)
        } else if self.opponent_of(account_id) == Some(winner) {
            Some(GameResult::Lose)
        } else {
            None
        }
    }

    /// Record the rating snapshots and stamp the resolution time
    pub(crate) fn record_snapshots(&mut self, player1_rating: i64, player2_rating: i64) {
        self.player1_rating_after = Some(player1_rating);
        self.player2_rating_after = Some(player2_rating);
        self.resolved_at = Some(current_timestamp());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::generate_account_id;

    fn standard_record(stake: i64) -> GameRecord {
        GameRecord::new(&GameSetup::Standard {
            player1: generate_account_id(),
            player2: generate_account_id(),
            stake,
        })
    }

    #[test]
    fn test_new_record_is_unresolved() {
        let game = standard_record(10);
        assert!(!game.is_resolved());
        assert_eq!(game.winner, None);
        assert_eq!(game.player1_rating_after, None);
        assert_eq!(game.resolved_at, None);
        assert_eq!(game.player1_stake, Some(10));
        assert_eq!(game.player2_stake, Some(10));
    }

    #[test]
    fn test_opponent_lookup() {
        let game = standard_record(5);
        assert_eq!(game.opponent_of(game.player1), Some(game.player2));
        assert_eq!(game.opponent_of(game.player2), Some(game.player1));
        assert_eq!(game.opponent_of(generate_account_id()), None);
    }

    #[test]
    fn test_result_relative_to_each_participant() {
        let mut game = standard_record(5);
        assert_eq!(game.result_for(game.player1), None);

        game.winner = Some(game.player2);
        assert_eq!(game.result_for(game.player1), Some(GameResult::Lose));
        assert_eq!(game.result_for(game.player2), Some(GameResult::Win));
        assert_eq!(game.result_for(generate_account_id()), None);
    }

    #[test]
    fn test_snapshots_marked_on_resolution() {
        let mut game = standard_record(5);
        game.winner = Some(game.player1);
        game.record_snapshots(11, 1);

        assert!(game.is_resolved());
        assert_eq!(game.rating_after(game.player1), Some(11));
        assert_eq!(game.rating_after(game.player2), Some(1));
        assert!(game.resolved_at.is_some());
    }
}
