//! Game records and variant construction parameters
//!
//! A game binds exactly two accounts, carries their rating stakes, and is
//! resolved exactly once. Records persist in the ledger as history entries.

pub mod record;
pub mod setup;

// Re-export commonly used types
pub use record::GameRecord;
pub use setup::GameSetup;
