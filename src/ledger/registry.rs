//! The in-memory account and game registry
//!
//! Owns the canonical records and implements the whole transaction protocol:
//! game construction validates both participants before any mutation, and
//! resolution runs both rating-policy hooks (player1 first, then player2,
//! with the winner already assigned) before any rating is touched.

use crate::account::AccountRecord;
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::game::{GameRecord, GameSetup};
use crate::stats::{render_report, StatsRow};
use crate::types::{AccountId, AccountKind, GameId};
use crate::utils::clamp_to_floor;
use std::collections::HashMap;
use tracing::{debug, info};

/// The competitive-rating ledger
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    config: LedgerConfig,
    accounts: HashMap<AccountId, AccountRecord>,
    games: HashMap<GameId, GameRecord>,
}

impl Ledger {
    /// Create an empty ledger with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger with a custom configuration
    pub fn with_config(config: LedgerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            accounts: HashMap::new(),
            games: HashMap::new(),
        })
    }

    /// The active configuration
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Create a new idle account of the given variant
    pub fn create_account(&mut self, kind: AccountKind, username: impl Into<String>) -> AccountId {
        let account = AccountRecord::new(kind, username, &self.config);
        let account_id = account.id;
        info!(
            "Created {} account '{}' ({})",
            account.kind(),
            account.username,
            account_id
        );
        self.accounts.insert(account_id, account);
        account_id
    }

    /// Look up an account record
    pub fn account(&self, account_id: AccountId) -> Result<&AccountRecord> {
        self.accounts
            .get(&account_id)
            .ok_or_else(|| LedgerError::AccountNotFound { account_id }.into())
    }

    /// Look up a game record
    pub fn game(&self, game_id: GameId) -> Result<&GameRecord> {
        self.games
            .get(&game_id)
            .ok_or_else(|| LedgerError::GameNotFound { game_id }.into())
    }

    /// Iterate over all account records
    pub fn accounts(&self) -> impl Iterator<Item = &AccountRecord> {
        self.accounts.values()
    }

    /// Iterate over all game records
    pub fn games(&self) -> impl Iterator<Item = &GameRecord> {
        self.games.values()
    }

    /// Construct a new game between two idle accounts.
    ///
    /// Validation runs strictly before any mutation: both accounts must
    /// exist, be distinct, and be idle, and the setup's stake parameters must
    /// be valid. On success both accounts are marked as playing and the game
    /// is appended to both histories.
    pub fn create_game(&mut self, setup: GameSetup) -> Result<GameId> {
        let (player1, player2) = setup.players();
        if player1 == player2 {
            return Err(LedgerError::InvalidPlayer {
                reason: "a game needs two distinct accounts".to_string(),
            }
            .into());
        }
        for player in [player1, player2] {
            let account = self.account(player)?;
            if account.is_playing() {
                return Err(LedgerError::AlreadyInGame {
                    username: account.username.clone(),
                }
                .into());
            }
        }
        setup.validate()?;

        let game = GameRecord::new(&setup);
        let game_id = game.id;
        self.account_mut(player1)?.join_game(game_id);
        self.account_mut(player2)?.join_game(game_id);
        info!(
            "Created {} game {} between '{}' and '{}'",
            game.kind,
            game_id,
            self.account(player1)?.username,
            self.account(player2)?.username
        );
        self.games.insert(game_id, game);
        Ok(game_id)
    }

    /// Declare the account the winner of its current game and resolve it
    pub fn declare_win(&mut self, account_id: AccountId) -> Result<()> {
        let game_id = self.playing_game(account_id)?;
        debug!("Account {} declares a win in game {}", account_id, game_id);
        self.resolve(game_id, account_id)
    }

    /// Declare the account the loser of its current game and resolve it
    pub fn declare_loss(&mut self, account_id: AccountId) -> Result<()> {
        let game_id = self.playing_game(account_id)?;
        let winner = self
            .game(game_id)?
            .opponent_of(account_id)
            .ok_or_else(|| LedgerError::InvalidPlayer {
                reason: format!("account {account_id} is not a participant of game {game_id}"),
            })?;
        debug!("Account {} declares a loss in game {}", account_id, game_id);
        self.resolve(game_id, winner)
    }

    /// Render the formatted stats report for an account
    pub fn account_stats(&self, account_id: AccountId) -> Result<String> {
        let account = self.account(account_id)?;
        let mut rows = Vec::with_capacity(account.game_list.len());
        for game_id in &account.game_list {
            let game = self.game(*game_id)?;
            let opponent_id =
                game.opponent_of(account_id)
                    .ok_or_else(|| LedgerError::InvalidPlayer {
                        reason: format!(
                            "account {account_id} is not a participant of game {game_id}"
                        ),
                    })?;
            rows.push(StatsRow {
                game_id: game.id,
                game_kind: game.kind,
                opponent: self.account(opponent_id)?.username.clone(),
                result: game.result_for(account_id),
                rating_delta: game.stake_of(account_id),
                total_rating: game.rating_after(account_id),
            });
        }
        Ok(render_report(&rows))
    }

    fn account_mut(&mut self, account_id: AccountId) -> Result<&mut AccountRecord> {
        self.accounts
            .get_mut(&account_id)
            .ok_or_else(|| LedgerError::AccountNotFound { account_id }.into())
    }

    fn game_mut(&mut self, game_id: GameId) -> Result<&mut GameRecord> {
        self.games
            .get_mut(&game_id)
            .ok_or_else(|| LedgerError::GameNotFound { game_id }.into())
    }

    /// The game an account is currently playing, or `NotPlaying`
    fn playing_game(&self, account_id: AccountId) -> Result<GameId> {
        let account = self.account(account_id)?;
        account.current_game.ok_or_else(|| {
            LedgerError::NotPlaying {
                username: account.username.clone(),
            }
            .into()
        })
    }

    /// Resolve a game with the given winner.
    ///
    /// Ordering is observable through the WinStreak counters and must not
    /// change: the winner is assigned, then player1's policy hook runs, then
    /// player2's, and only then are the ratings mutated (winner first, loser
    /// clamped to the floor), snapshotted, and both accounts released.
    fn resolve(&mut self, game_id: GameId, winner: AccountId) -> Result<()> {
        let config = self.config.clone();

        let (player1, player2) = {
            let game = self.game_mut(game_id)?;
            game.winner = Some(winner);
            (game.player1, game.player2)
        };

        for player in [player1, player2] {
            let stake = self.game(game_id)?.stake_of(player);
            let won = player == winner;
            let adjusted = self.account_mut(player)?.policy.adjust(stake, won, &config);
            self.game_mut(game_id)?.set_stake(player, adjusted);
        }

        let loser = if winner == player1 { player2 } else { player1 };
        if let Some(delta) = self.game(game_id)?.stake_of(winner) {
            let account = self.account_mut(winner)?;
            account.rating = account.rating.saturating_add(delta);
        }
        if let Some(delta) = self.game(game_id)?.stake_of(loser) {
            let account = self.account_mut(loser)?;
            account.rating =
                clamp_to_floor(account.rating.saturating_sub(delta), config.rating_floor);
        }

        let player1_rating = self.account(player1)?.rating;
        let player2_rating = self.account(player2)?.rating;
        self.game_mut(game_id)?.record_snapshots(player1_rating, player2_rating);

        self.account_mut(player1)?.finish_game();
        self.account_mut(player2)?.finish_game();

        info!(
            "Resolved game {}: winner '{}', ratings now {}/{}",
            game_id,
            self.account(winner)?.username,
            player1_rating,
            player2_rating
        );
        Ok(())
    }
}
