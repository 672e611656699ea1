//! Common types used throughout the rating ledger

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for accounts
pub type AccountId = Uuid;

/// Unique identifier for games
pub type GameId = Uuid;

/// A rating delta at stake in a game.
///
/// `None` is the "no stake" sentinel: no rating change is at stake for the
/// player, and the stats report renders it as `-`.
pub type Stake = Option<i64>;

/// Account variant, selecting the rating policy the account plays under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    /// Deltas applied as proposed
    Standard,
    /// Never gains or loses rating
    Training,
    /// Gains and losses both halved
    Lite,
    /// Doubled deltas while on a win streak
    WinStreak,
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // pad() keeps width/fill flags working in fixed-width tables.
        f.pad(match self {
            AccountKind::Standard => "Standard",
            AccountKind::Training => "Training",
            AccountKind::Lite => "Lite",
            AccountKind::WinStreak => "WinStreak",
        })
    }
}

/// Game variant, selecting how stakes are assigned to the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    /// One shared stake proposed to both players
    Standard,
    /// No stake for either player
    Training,
    /// A stake for exactly one designated player
    HalfRating,
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            GameKind::Standard => "Standard",
            GameKind::Training => "Training",
            GameKind::HalfRating => "HalfRating",
        })
    }
}

/// Outcome of a resolved game relative to one participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Lose,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            GameResult::Win => "win",
            GameResult::Lose => "lose",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_names() {
        assert_eq!(AccountKind::WinStreak.to_string(), "WinStreak");
        assert_eq!(GameKind::HalfRating.to_string(), "HalfRating");
        assert_eq!(GameResult::Lose.to_string(), "lose");
    }

    #[test]
    fn test_display_honors_width_and_alignment() {
        assert_eq!(format!("{:^16}", GameKind::Standard), "    Standard    ");
        assert_eq!(format!("{:^16}", AccountKind::Lite), "      Lite      ");
        assert_eq!(format!("{:^10}", GameResult::Win), "   win    ");
    }

    #[test]
    fn test_kind_serde_round_trip() {
        let json = serde_json::to_string(&AccountKind::Lite).unwrap();
        let back: AccountKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AccountKind::Lite);
    }
}
