//! Game-tree search

pub mod minimax;

pub use minimax::{Minimax, SearchReport, SearchResult};
