//! # Towers of Hanoi
//!
//! The classic three-column disk puzzle in the terminal. Play it with the
//! arrow keys, or watch the recursive solver animate the minimal solution.
//! Features a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core puzzle logic: columns, move rule, state, column selection
//! - [`solver`]: Recursive minimal-move solver
//! - [`session`]: Interactive and auto-solve drivers and their front-end contracts
//! - [`ui`]: Terminal UI: block-art towers, option menu, key mapping
//! - [`input`]: Classified key events
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod session;
pub mod solver;
pub mod ui;
