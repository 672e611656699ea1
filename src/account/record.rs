//! Account record state
//!
//! The ledger owns the canonical records; games and histories refer to
//! accounts by id only.

use crate::account::policy::RatingPolicy;
use crate::config::LedgerConfig;
use crate::types::{AccountId, AccountKind, GameId};
use crate::utils::{current_timestamp, generate_account_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A player account with its rating and game history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: AccountId,
    pub username: String,
    pub rating: i64,
    pub games_count: u64,
    /// Games joined, in chronological order (append-only)
    pub game_list: Vec<GameId>,
    /// The game the account is presently engaged in, if any
    pub current_game: Option<GameId>,
    pub policy: RatingPolicy,
    pub created_at: DateTime<Utc>,
}

impl AccountRecord {
    /// Create a new idle account of the given variant
    pub fn new(kind: AccountKind, username: impl Into<String>, config: &LedgerConfig) -> Self {
        Self {
            id: generate_account_id(),
            username: username.into(),
            rating: config.initial_rating,
            games_count: 0,
            game_list: Vec::new(),
            current_game: None,
            policy: RatingPolicy::for_kind(kind),
            created_at: current_timestamp(),
        }
    }

    /// The account variant
    pub fn kind(&self) -> AccountKind {
        self.policy.kind()
    }

    /// Whether the account is presently engaged in a game
    pub fn is_playing(&self) -> bool {
        self.current_game.is_some()
    }

    /// Enter a game: mark it current and append it to the history
    pub(crate) fn join_game(&mut self, game_id: GameId) {
        self.current_game = Some(game_id);
        self.game_list.push(game_id);
    }

    /// Leave the current game after resolution
    pub(crate) fn finish_game(&mut self) {
        self.games_count += 1;
        self.current_game = None;
    }
}
