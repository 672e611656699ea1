//! Rating Ledger - In-memory competitive-rating ledger for two-party games
//!
//! This crate models player accounts that accrue or lose an integer rating
//! from the outcomes of two-party games. Account variants (Standard,
//! Training, Lite, WinStreak) adjust proposed rating deltas through a
//! per-account policy, and game variants (Standard, Training, HalfRating)
//! decide which players have a stake at all. A [`Ledger`] owns every record;
//! accounts and games refer to each other by id only.
//!
//! ```
//! use rating_ledger::{AccountKind, GameSetup, Ledger};
//!
//! let mut ledger = Ledger::new();
//! let alice = ledger.create_account(AccountKind::Standard, "alice");
//! let bob = ledger.create_account(AccountKind::Lite, "bob");
//!
//! ledger.create_game(GameSetup::Standard {
//!     player1: alice,
//!     player2: bob,
//!     stake: 10,
//! })?;
//! ledger.declare_win(alice)?;
//!
//! assert_eq!(ledger.account(alice)?.rating, 11);
//! println!("{}", ledger.account_stats(alice)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod account;
pub mod config;
pub mod error;
pub mod game;
pub mod ledger;
pub mod stats;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{LedgerError, Result};
pub use types::*;

// Re-export key components
pub use account::{AccountRecord, RatingPolicy};
pub use config::LedgerConfig;
pub use game::{GameRecord, GameSetup};
pub use ledger::Ledger;
pub use stats::StatsRow;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
