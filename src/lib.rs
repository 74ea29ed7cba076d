//! # Connect Four Minimax
//!
//! Board model and move-selection engine for Connect Four: gravity drops,
//! four-in-a-row detection, a window-counting heuristic, and a depth-limited
//! alpha-beta search behind a single [`ai::choose_move`] entry point.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, and a turn-tracking game state
//! - [`ai`] — Heuristic, search, move selector, agents
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
