//! Rating policy variants
//!
//! Each account carries one policy by value. During resolution the policy is
//! handed the player's stake and whether the player won, and returns the
//! adjusted delta to actually apply. WinStreak is the only stateful variant:
//! it tracks consecutive wins across the account's games.

use crate::config::LedgerConfig;
use crate::types::{AccountKind, Stake};
use serde::{Deserialize, Serialize};

/// Per-account rating adjustment policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingPolicy {
    /// Deltas applied as proposed
    Standard,
    /// No delta ever applied, regardless of the stake
    Training,
    /// Deltas halved, floor division
    Lite,
    /// Deltas doubled once the account is on a long enough win streak
    WinStreak { winstreak: u32 },
}

impl RatingPolicy {
    /// Create the policy for an account variant
    pub fn for_kind(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Standard => RatingPolicy::Standard,
            AccountKind::Training => RatingPolicy::Training,
            AccountKind::Lite => RatingPolicy::Lite,
            AccountKind::WinStreak => RatingPolicy::WinStreak { winstreak: 0 },
        }
    }

    /// The account variant this policy belongs to
    pub fn kind(&self) -> AccountKind {
        match self {
            RatingPolicy::Standard => AccountKind::Standard,
            RatingPolicy::Training => AccountKind::Training,
            RatingPolicy::Lite => AccountKind::Lite,
            RatingPolicy::WinStreak { .. } => AccountKind::WinStreak,
        }
    }

    /// Current win streak, if this is a WinStreak policy
    pub fn winstreak(&self) -> Option<u32> {
        match self {
            RatingPolicy::WinStreak { winstreak } => Some(*winstreak),
            _ => None,
        }
    }

    /// Adjust a proposed rating delta for the outcome of the current game.
    ///
    /// Invoked once per player per resolution, after the winner is assigned
    /// and before any rating mutation. The WinStreak counter is updated here
    /// for winner and loser alike, so the hook must run even when the stake
    /// is `None`.
    pub fn adjust(&mut self, stake: Stake, won: bool, config: &LedgerConfig) -> Stake {
        match self {
            RatingPolicy::Standard => stake,
            RatingPolicy::Training => None,
            RatingPolicy::Lite => stake.map(|delta| delta.div_euclid(2)),
            RatingPolicy::WinStreak { winstreak } => {
                if won {
                    *winstreak += 1;
                } else {
                    *winstreak = 0;
                }
                if *winstreak >= config.streak_threshold {
                    stake.map(|delta| delta.saturating_mul(config.streak_multiplier))
                } else {
                    stake
                }
            }
        }
    }
}
