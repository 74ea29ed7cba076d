//! Core Connect Four game logic: the gravity board, the two sides, and a game
//! state that tracks turns and outcomes.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS, WINDOW};
pub use player::Player;
pub use state::{GameOutcome, GameState};
