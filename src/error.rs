//! Error types for the rating ledger
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the crate.

use crate::types::{AccountId, GameId};

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific ledger scenarios
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("{username} is not playing any game")]
    NotPlaying { username: String },

    #[error("player {username} is already in game")]
    AlreadyInGame { username: String },

    #[error("rating stake must be non-negative, got {rating}")]
    InvalidRating { rating: i64 },

    #[error("invalid player: {reason}")]
    InvalidPlayer { reason: String },

    #[error("account not found: {account_id}")]
    AccountNotFound { account_id: AccountId },

    #[error("game not found: {game_id}")]
    GameNotFound { game_id: GameId },

    #[error("configuration error: {message}")]
    ConfigurationError { message: String },
}
