//! Evaluation and move search for gomoku.

pub mod config;
pub mod eval;
pub mod search;

pub use config::{ConfigError, SearchConfig};
pub use eval::{Score, evaluate};
pub use search::control::SearchControl;
pub use search::{Decision, SearchResult, Searcher};
