//! Adapters implementing domain ports.

pub mod human;
pub mod minimax;
pub mod random;

pub use human::HumanOpponent;
pub use minimax::MinimaxOpponent;
pub use random::RandomOpponent;
