//! # N in a Row
//!
//! Two-player grid games where the first side to align `win_length` marks
//! wins: Tic-Tac-Toe on any board size, and gravity-drop games such as
//! Connect Four. An automated opponent picks moves with exhaustive minimax
//! search on small boards and flat Monte-Carlo playouts on large ones.
//!
//! ## Modules
//!
//! - [`game`]: Board state, move addressing, anchored win/draw detection
//! - [`ai`]: Agent trait, minimax with alpha-beta, Monte-Carlo playouts
//! - [`session`]: Seats, agent-vs-agent games, scoreboard
//! - [`ui`]: Console rendering and the interactive session
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
