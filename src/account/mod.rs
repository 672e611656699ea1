//! Account records and per-variant rating policies
//!
//! An account holds identity, rating, and game history; the rating policy it
//! carries decides how proposed rating deltas are adjusted before they apply.

pub mod policy;
pub mod record;

// Re-export commonly used types
pub use policy::RatingPolicy;
pub use record::AccountRecord;
