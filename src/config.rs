//! Ledger configuration
//!
//! Tunable constants of the rating model: the rating every fresh account
//! starts with, the floor ratings are clamped to, and the win-streak
//! parameters.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};

/// Configuration for the rating ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Rating assigned to newly created accounts
    pub initial_rating: i64,
    /// Lower bound no account rating ever falls below
    pub rating_floor: i64,
    /// Consecutive wins required before the streak multiplier kicks in
    pub streak_threshold: u32,
    /// Multiplier applied to deltas once the streak threshold is reached
    pub streak_multiplier: i64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            initial_rating: 1,
            rating_floor: 1,
            streak_threshold: 3,
            streak_multiplier: 2,
        }
    }
}

impl LedgerConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.initial_rating < self.rating_floor {
            return Err(LedgerError::ConfigurationError {
                message: "Initial rating must not be below the rating floor".to_string(),
            }
            .into());
        }

        if self.streak_threshold == 0 {
            return Err(LedgerError::ConfigurationError {
                message: "Streak threshold must be at least 1".to_string(),
            }
            .into());
        }

        if self.streak_multiplier < 1 {
            return Err(LedgerError::ConfigurationError {
                message: "Streak multiplier must be at least 1".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
