//! Move selection: the positional heuristic, the alpha-beta search, the
//! `choose_move` entry point and agents built on top of them.

mod agent;
pub mod heuristic;
mod random;
pub mod search;
mod selector;

pub use agent::{Agent, MinimaxAgent};
pub use heuristic::{EvalWeights, Heuristic, WindowHeuristic};
pub use random::RandomAgent;
pub use search::{Minimax, SearchResult, SearchStats, WIN_SCORE};
pub use selector::{choose_move, choose_move_with};
