//! Application layer: configuration, wiring, and analysis entry points.
//!
//! ```text
//! GameConfig ──► App::play ──► Session ──► MinimaxOpponent ──► Minimax ──► Evaluator
//!                    │              └────► Opponent (human / random)
//!                    └──► Game record (JSON)
//! ```

pub mod analysis;
pub mod config;
pub mod container;

pub use analysis::{BoardAnalysis, analyze_board};
pub use config::{GameConfig, OpponentKind};
pub use container::App;
