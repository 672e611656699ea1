//! Utility functions for the rating ledger

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique account ID
pub fn generate_account_id() -> Uuid {
    Uuid::new_v4()
}

/// Generate a new unique game ID
pub fn generate_game_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Clamp a rating so it never falls below the configured floor
pub fn clamp_to_floor(rating: i64, floor: i64) -> i64 {
    rating.max(floor)
}
