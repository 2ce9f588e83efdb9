//! Ports (trait boundaries) for external dependencies.
//!
//! The turn loop talks to players only through these traits; adapters
//! implement them for the console, random play, and the search.

pub mod opponent;

pub use opponent::Opponent;
