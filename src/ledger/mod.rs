//! The ledger registry and transaction surface
//!
//! The ledger is the arena that owns every account and game record; all
//! cross-references between them are plain ids. Every mutating operation of
//! the model (account creation, game construction, win/lose resolution) goes
//! through it.

pub mod registry;

// Re-export commonly used types
pub use registry::Ledger;
