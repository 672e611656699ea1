//! Per-account stats reporting
//!
//! Renders an account's game history as a fixed-width table, one row per game
//! in chronological order. Deltas are signed by the outcome; a `-` marks "no
//! stake" (including a policy-adjusted delta of zero) and the fields of a
//! still-unresolved game.

use crate::types::{GameId, GameKind, GameResult, Stake};
use serde::{Deserialize, Serialize};

const GAME_ID_WIDTH: usize = 40;
const GAME_TYPE_WIDTH: usize = 16;
const OPPONENT_WIDTH: usize = 16;
const RESULT_WIDTH: usize = 10;
const RATING_WIDTH: usize = 10;
const TOTAL_RATING_WIDTH: usize = 14;

/// One row of the stats report, describing a game from one account's side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsRow {
    pub game_id: GameId,
    pub game_kind: GameKind,
    pub opponent: String,
    /// `None` while the game is still unresolved
    pub result: Option<GameResult>,
    /// The policy-adjusted delta applied to this account, `None` for no stake
    pub rating_delta: Stake,
    /// This account's rating snapshot immediately after the game
    pub total_rating: Option<i64>,
}

impl StatsRow {
    /// The signed delta column: `+d`/`-d` by outcome, `-` for no stake or
    /// a zero delta
    fn rating_column(&self) -> String {
        match (self.result, self.rating_delta) {
            (Some(GameResult::Win), Some(delta)) if delta != 0 => format!("+{delta}"),
            (Some(GameResult::Lose), Some(delta)) if delta != 0 => format!("-{delta}"),
            _ => "-".to_string(),
        }
    }

    fn render(&self) -> String {
        let result = self
            .result
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        let total = self
            .total_rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        // Uuid's Display ignores width/fill flags, so pad its string form.
        format!(
            "{:^GAME_ID_WIDTH$}{:^GAME_TYPE_WIDTH$}{:^OPPONENT_WIDTH$}{:^RESULT_WIDTH$}{:^RATING_WIDTH$}{:^TOTAL_RATING_WIDTH$}\n",
            self.game_id.to_string(),
            self.game_kind,
            self.opponent,
            result,
            self.rating_column(),
            total,
        )
    }
}

/// Render the full report: header line plus one line per row
pub fn render_report(rows: &[StatsRow]) -> String {
    let mut report = format!(
        "{:^GAME_ID_WIDTH$}{:^GAME_TYPE_WIDTH$}{:^OPPONENT_WIDTH$}{:^RESULT_WIDTH$}{:^RATING_WIDTH$}{:^TOTAL_RATING_WIDTH$}\n",
        "Game ID", "Game Type", "Opponent", "Result", "Rating", "Total Rating",
    );
    for row in rows {
        report.push_str(&row.render());
    }
    report
}
