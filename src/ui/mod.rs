//! Terminal UI: block-art towers, the generic option menu, and the
//! crossterm/ratatui front end that drives both.

mod app;
pub mod keys;
pub mod menu;
pub mod menu_view;
pub mod tower_view;

pub use app::App;
pub use menu::{Menu, MenuOutcome, MenuStyle};
